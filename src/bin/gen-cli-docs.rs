use clap_markdown::help_markdown;
use launcher_patch::cli::Cli;

fn main() {
    // Print header
    println!("# launcher-patch CLI Reference");
    println!();
    println!("This page contains the auto-generated reference documentation for the `launcher-patch` command-line interface.");
    println!();

    println!("{}", help_markdown::<Cli>());
}
