use crate::CLAP_STYLING;
use clap::{arg, command};
use std::path::PathBuf;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("mapmark")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("mapmark")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress non-essential output").required(false))
        .arg(arg!(-v --"verbose" "Log every file as it is loaded").required(false))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            command!("render")
                .about("Builds a Leaflet map page from a project file")
                .arg(
                    arg!(-c --"config" <PATH>)
                        .required(true)
                        .help("Path to the project TOML file")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Where to write the map (.html page or .json summary)")
                        .value_parser(clap::value_parser!(PathBuf))
                        .default_value("map.html"),
                )
                .arg(
                    arg!(--"summary" <PATH>)
                        .required(false)
                        .help("Also write a JSON summary of the map contents")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--"normalize")
                        .required(false)
                        .help("Backfill missing attributes in every marker directory first")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    arg!(--"strict-geojson")
                        .required(false)
                        .help("Reject area files that are not valid geoJSON")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            command!("normalize")
                .about(
                    "Adds missing marker attributes as empty strings, rewriting the files in \
                place. Safe to run repeatedly.",
                )
                .arg(
                    arg!(<DIR>)
                        .required(true)
                        .help("Directory of marker JSON files")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            command!("check")
                .about("Loads marker and/or area directories and reports problems")
                .arg(
                    arg!(-m --"markers" <DIR>)
                        .required(false)
                        .help("Directory of marker JSON files")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(-a --"areas" <DIR>)
                        .required(false)
                        .help("Directory of geoJSON area files")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--"strict-geojson")
                        .required(false)
                        .help("Validate each area as geoJSON")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
}
