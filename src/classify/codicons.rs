//! Identifiers of the codicon font accepted by Kilo Code mode icons.

pub const CODICONS: &[&str] = &[
    "codicon-account",
    "codicon-activate-breakpoints",
    "codicon-add",
    "codicon-archive",
    "codicon-arrow-both",
    "codicon-arrow-circle-down",
    "codicon-arrow-circle-left",
    "codicon-arrow-circle-right",
    "codicon-arrow-circle-up",
    "codicon-arrow-down",
    "codicon-arrow-left",
    "codicon-arrow-right",
    "codicon-arrow-small-down",
    "codicon-arrow-small-left",
    "codicon-arrow-small-right",
    "codicon-arrow-small-up",
    "codicon-arrow-swap",
    "codicon-arrow-up",
    "codicon-attach",
    "codicon-azure",
    "codicon-azure-devops",
    "codicon-beaker",
    "codicon-beaker-stop",
    "codicon-bell",
    "codicon-bell-dot",
    "codicon-bell-slash",
    "codicon-bell-slash-dot",
    "codicon-blank",
    "codicon-bold",
    "codicon-book",
    "codicon-bookmark",
    "codicon-bracket-dot",
    "codicon-bracket-error",
    "codicon-briefcase",
    "codicon-broadcast",
    "codicon-browser",
    "codicon-bug",
    "codicon-calendar",
    "codicon-call-incoming",
    "codicon-call-outgoing",
    "codicon-case-sensitive",
    "codicon-chat-sparkle",
    "codicon-check",
    "codicon-check-all",
    "codicon-checklist",
    "codicon-chevron-down",
    "codicon-chevron-left",
    "codicon-chevron-right",
    "codicon-chevron-up",
    "codicon-chip",
    "codicon-chrome-close",
    "codicon-chrome-maximize",
    "codicon-chrome-minimize",
    "codicon-chrome-restore",
    "codicon-circle",
    "codicon-circle-filled",
    "codicon-circle-large",
    "codicon-circle-large-filled",
    "codicon-circle-slash",
    "codicon-circle-small",
    "codicon-circle-small-filled",
    "codicon-circuit-board",
    "codicon-clear-all",
    "codicon-clippy",
    "codicon-close",
    "codicon-close-all",
    "codicon-cloud",
    "codicon-cloud-download",
    "codicon-cloud-upload",
    "codicon-code",
    "codicon-code-oss",
    "codicon-code-review",
    "codicon-coffee",
    "codicon-collapse-all",
    "codicon-color-mode",
    "codicon-combine",
    "codicon-comment",
    "codicon-comment-discussion",
    "codicon-comment-draft",
    "codicon-comment-unresolved",
    "codicon-compass",
    "codicon-compass-active",
    "codicon-compass-dot",
    "codicon-copilot",
    "codicon-copilot-blocked",
    "codicon-copilot-error",
    "codicon-copilot-in-progress",
    "codicon-copilot-large",
    "codicon-copilot-not-connected",
    "codicon-copilot-snooze",
    "codicon-copilot-success",
    "codicon-copilot-unavailable",
    "codicon-copilot-warning",
    "codicon-copilot-warning-large",
    "codicon-copy",
    "codicon-coverage",
    "codicon-credit-card",
    "codicon-dash",
    "codicon-dashboard",
    "codicon-database",
    "codicon-debug",
    "codicon-debug-all",
    "codicon-debug-alt",
    "codicon-debug-alt-small",
    "codicon-debug-breakpoint-conditional",
    "codicon-debug-breakpoint-conditional-unverified",
    "codicon-debug-breakpoint-data",
    "codicon-debug-breakpoint-data-unverified",
    "codicon-debug-breakpoint-function",
    "codicon-debug-breakpoint-function-unverified",
    "codicon-debug-breakpoint-log",
    "codicon-debug-breakpoint-log-unverified",
    "codicon-debug-breakpoint-unsupported",
    "codicon-debug-console",
    "codicon-debug-continue",
    "codicon-debug-continue-small",
    "codicon-debug-coverage",
    "codicon-debug-disconnect",
    "codicon-debug-line-by-line",
    "codicon-debug-pause",
    "codicon-debug-rerun",
    "codicon-debug-restart",
    "codicon-debug-restart-frame",
    "codicon-debug-reverse-continue",
    "codicon-debug-stackframe",
    "codicon-debug-stackframe-active",
    "codicon-debug-start",
    "codicon-debug-step-back",
    "codicon-debug-step-into",
    "codicon-debug-step-out",
    "codicon-debug-step-over",
    "codicon-debug-stop",
    "codicon-desktop-download",
    "codicon-device-camera",
    "codicon-device-camera-video",
    "codicon-device-mobile",
    "codicon-diff",
    "codicon-diff-added",
    "codicon-diff-ignored",
    "codicon-diff-modified",
    "codicon-diff-multiple",
    "codicon-diff-removed",
    "codicon-diff-renamed",
    "codicon-diff-single",
    "codicon-discard",
    "codicon-edit",
    "codicon-edit-session",
    "codicon-edit-sparkle",
    "codicon-editor-layout",
    "codicon-ellipsis",
    "codicon-empty-window",
    "codicon-error",
    "codicon-error-small",
    "codicon-exclude",
    "codicon-expand-all",
    "codicon-export",
    "codicon-extensions",
    "codicon-extensions-large",
    "codicon-eye",
    "codicon-eye-closed",
    "codicon-feedback",
    "codicon-file",
    "codicon-file-binary",
    "codicon-file-code",
    "codicon-file-media",
    "codicon-file-pdf",
    "codicon-file-submodule",
    "codicon-file-symlink-directory",
    "codicon-file-symlink-file",
    "codicon-file-zip",
    "codicon-files",
    "codicon-filter",
    "codicon-filter-filled",
    "codicon-flag",
    "codicon-flame",
    "codicon-fold",
    "codicon-fold-down",
    "codicon-fold-up",
    "codicon-folder",
    "codicon-folder-active",
    "codicon-folder-library",
    "codicon-folder-opened",
    "codicon-game",
    "codicon-gear",
    "codicon-gift",
    "codicon-gist",
    "codicon-gist-secret",
    "codicon-git-commit",
    "codicon-git-compare",
    "codicon-git-fetch",
    "codicon-git-merge",
    "codicon-git-pull-request",
    "codicon-git-pull-request-closed",
    "codicon-git-pull-request-create",
    "codicon-git-pull-request-done",
    "codicon-git-pull-request-draft",
    "codicon-git-pull-request-go-to-changes",
    "codicon-git-pull-request-new-changes",
    "codicon-git-stash",
    "codicon-git-stash-apply",
    "codicon-git-stash-pop",
    "codicon-github",
    "codicon-github-action",
    "codicon-github-alt",
    "codicon-github-inverted",
    "codicon-github-project",
    "codicon-globe",
    "codicon-go-to-editing-session",
    "codicon-go-to-file",
    "codicon-go-to-search",
    "codicon-grabber",
    "codicon-graph",
    "codicon-graph-left",
    "codicon-graph-line",
    "codicon-graph-scatter",
    "codicon-gripper",
    "codicon-group-by-ref-type",
    "codicon-heart",
    "codicon-heart-filled",
    "codicon-history",
    "codicon-home",
    "codicon-horizontal-rule",
    "codicon-hubot",
    "codicon-inbox",
    "codicon-indent",
    "codicon-info",
    "codicon-insert",
    "codicon-inspect",
    "codicon-issue-draft",
    "codicon-issue-reopened",
    "codicon-issues",
    "codicon-italic",
    "codicon-jersey",
    "codicon-json",
    "codicon-kebab-vertical",
    "codicon-key",
    "codicon-keyboard-tab",
    "codicon-keyboard-tab-above",
    "codicon-keyboard-tab-below",
    "codicon-law",
    "codicon-layers",
    "codicon-layers-active",
    "codicon-layers-dot",
    "codicon-layout",
    "codicon-layout-activitybar-left",
    "codicon-layout-activitybar-right",
    "codicon-layout-centered",
    "codicon-layout-menubar",
    "codicon-layout-panel",
    "codicon-layout-panel-center",
    "codicon-layout-panel-dock",
    "codicon-layout-panel-justify",
    "codicon-layout-panel-left",
    "codicon-layout-panel-off",
    "codicon-layout-panel-right",
    "codicon-layout-sidebar-left",
    "codicon-layout-sidebar-left-dock",
    "codicon-layout-sidebar-left-off",
    "codicon-layout-sidebar-right",
    "codicon-layout-sidebar-right-dock",
    "codicon-layout-sidebar-right-off",
    "codicon-layout-statusbar",
    "codicon-library",
    "codicon-lightbulb",
    "codicon-lightbulb-autofix",
    "codicon-lightbulb-empty",
    "codicon-lightbulb-sparkle",
    "codicon-link",
    "codicon-link-external",
    "codicon-list-filter",
    "codicon-list-flat",
    "codicon-list-ordered",
    "codicon-list-selection",
    "codicon-list-tree",
    "codicon-list-unordered",
    "codicon-live-share",
    "codicon-loading",
    "codicon-location",
    "codicon-lock",
    "codicon-lock-small",
    "codicon-magnet",
    "codicon-mail",
    "codicon-mail-read",
    "codicon-map",
    "codicon-map-filled",
    "codicon-map-vertical",
    "codicon-map-vertical-filled",
    "codicon-markdown",
    "codicon-mcp",
    "codicon-megaphone",
    "codicon-mention",
    "codicon-menu",
    "codicon-merge",
    "codicon-mic",
    "codicon-mic-filled",
    "codicon-milestone",
    "codicon-mirror",
    "codicon-mortar-board",
    "codicon-move",
    "codicon-multiple-windows",
    "codicon-music",
    "codicon-mute",
    "codicon-new-file",
    "codicon-new-folder",
    "codicon-newline",
    "codicon-no-newline",
    "codicon-note",
    "codicon-notebook",
    "codicon-notebook-template",
    "codicon-octoface",
    "codicon-open-preview",
    "codicon-organization",
    "codicon-output",
    "codicon-package",
    "codicon-paintcan",
    "codicon-pass",
    "codicon-pass-filled",
    "codicon-percentage",
    "codicon-person",
    "codicon-person-add",
    "codicon-piano",
    "codicon-pie-chart",
    "codicon-pin",
    "codicon-pinned",
    "codicon-pinned-dirty",
    "codicon-play",
    "codicon-play-circle",
    "codicon-plug",
    "codicon-preserve-case",
    "codicon-preview",
    "codicon-primitive-square",
    "codicon-project",
    "codicon-pulse",
    "codicon-python",
    "codicon-question",
    "codicon-quote",
    "codicon-radio-tower",
    "codicon-reactions",
    "codicon-record",
    "codicon-record-keys",
    "codicon-record-small",
    "codicon-redo",
    "codicon-references",
    "codicon-refresh",
    "codicon-regex",
    "codicon-remote",
    "codicon-remote-explorer",
    "codicon-remove",
    "codicon-replace",
    "codicon-replace-all",
    "codicon-reply",
    "codicon-repo",
    "codicon-repo-clone",
    "codicon-repo-fetch",
    "codicon-repo-force-push",
    "codicon-repo-forked",
    "codicon-repo-pinned",
    "codicon-repo-pull",
    "codicon-repo-push",
    "codicon-report",
    "codicon-request-changes",
    "codicon-robot",
    "codicon-rocket",
    "codicon-root-folder",
    "codicon-root-folder-opened",
    "codicon-rss",
    "codicon-ruby",
    "codicon-run-above",
    "codicon-run-all",
    "codicon-run-all-coverage",
    "codicon-run-below",
    "codicon-run-coverage",
    "codicon-run-errors",
    "codicon-save",
    "codicon-save-all",
    "codicon-save-as",
    "codicon-screen-full",
    "codicon-screen-normal",
    "codicon-search",
    "codicon-search-fuzzy",
    "codicon-search-sparkle",
    "codicon-search-stop",
    "codicon-send",
    "codicon-send-to-remote-agent",
    "codicon-server",
    "codicon-server-environment",
    "codicon-server-process",
    "codicon-settings",
    "codicon-settings-gear",
    "codicon-share",
    "codicon-shield",
    "codicon-sign-in",
    "codicon-sign-out",
    "codicon-smiley",
    "codicon-snake",
    "codicon-sort-precedence",
    "codicon-source-control",
    "codicon-sparkle",
    "codicon-sparkle-filled",
    "codicon-split-horizontal",
    "codicon-split-vertical",
    "codicon-squirrel",
    "codicon-star-empty",
    "codicon-star-full",
    "codicon-star-half",
    "codicon-stop-circle",
    "codicon-surround-with",
    "codicon-symbol-array",
    "codicon-symbol-boolean",
    "codicon-symbol-class",
    "codicon-symbol-color",
    "codicon-symbol-constant",
    "codicon-symbol-enum",
    "codicon-symbol-enum-member",
    "codicon-symbol-event",
    "codicon-symbol-field",
    "codicon-symbol-file",
    "codicon-symbol-interface",
    "codicon-symbol-key",
    "codicon-symbol-keyword",
    "codicon-symbol-method",
    "codicon-symbol-method-arrow",
    "codicon-symbol-misc",
    "codicon-symbol-namespace",
    "codicon-symbol-numeric",
    "codicon-symbol-operator",
    "codicon-symbol-parameter",
    "codicon-symbol-property",
    "codicon-symbol-ruler",
    "codicon-symbol-snippet",
    "codicon-symbol-string",
    "codicon-symbol-structure",
    "codicon-symbol-variable",
    "codicon-sync",
    "codicon-sync-ignored",
    "codicon-table",
    "codicon-tag",
    "codicon-target",
    "codicon-tasklist",
    "codicon-telescope",
    "codicon-terminal",
    "codicon-terminal-bash",
    "codicon-terminal-cmd",
    "codicon-terminal-debian",
    "codicon-terminal-linux",
    "codicon-terminal-powershell",
    "codicon-terminal-tmux",
    "codicon-terminal-ubuntu",
    "codicon-text-size",
    "codicon-three-bars",
    "codicon-thumbsdown",
    "codicon-thumbsdown-filled",
    "codicon-thumbsup",
    "codicon-thumbsup-filled",
    "codicon-tools",
    "codicon-trash",
    "codicon-triangle-down",
    "codicon-triangle-left",
    "codicon-triangle-right",
    "codicon-triangle-up",
    "codicon-twitter",
    "codicon-type-hierarchy",
    "codicon-type-hierarchy-sub",
    "codicon-type-hierarchy-super",
    "codicon-unfold",
    "codicon-ungroup-by-ref-type",
    "codicon-unlock",
    "codicon-unmute",
    "codicon-unverified",
    "codicon-variable-group",
    "codicon-verified",
    "codicon-verified-filled",
    "codicon-versions",
    "codicon-vm",
    "codicon-vm-active",
    "codicon-vm-connect",
    "codicon-vm-outline",
    "codicon-vm-running",
    "codicon-vr",
    "codicon-vscode",
    "codicon-vscode-insiders",
    "codicon-wand",
    "codicon-warning",
    "codicon-watch",
    "codicon-whitespace",
    "codicon-whole-word",
    "codicon-window",
    "codicon-word-wrap",
    "codicon-workspace-trusted",
    "codicon-workspace-unknown",
    "codicon-workspace-untrusted",
    "codicon-zoom-in",
    "codicon-zoom-out",
];
