use clap::CommandFactory;

use crate::cli::Cli;

pub fn run(shell: clap_complete::Shell) -> Result<(), String> {
    let mut out = Vec::new();
    clap_complete::generate(shell, &mut Cli::command(), "arbor", &mut out);
    print!("{}", String::from_utf8_lossy(&out));
    Ok(())
}
