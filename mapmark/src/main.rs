use commands::command_argument_builder;
use mapmark::handlers::{handle_check, handle_normalize, handle_render, init_logging};

mod commands;

fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");
    let verbose = chosen_command.get_flag("verbose");

    init_logging(verbose, quiet);

    match chosen_command.subcommand() {
        Some(("render", primary_command)) => handle_render(primary_command, quiet),
        Some(("normalize", primary_command)) => handle_normalize(primary_command, quiet),
        Some(("check", primary_command)) => handle_check(primary_command, quiet),
        _ => unreachable!("clap should ensure we don't get here"),
    }
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
