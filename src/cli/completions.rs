use std::io::Write;

use clap::Command;
use clap_complete::{generate, Shell};

/// Write completions for `cmd` to `out`.
pub fn run(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, out);
}
