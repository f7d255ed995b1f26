use clap::Parser;
use normals_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Normals Processor - NOAA Climate Normals Parser");
    println!("===============================================");
    println!();
    println!("Parse fixed-format NOAA hourly climate normals data files into");
    println!("structured station-day records exported as JSON.");
    println!();
    println!("USAGE:");
    println!("    normals-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    parse    Parse a normals file and export matching station records");
    println!("    flags    Show the quality flag and sentinel code reference tables");
    println!("    help     Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Export two stations from an hourly temperature normals file:");
    println!("    normals-processor parse --input hly-temp-normal.txt \\");
    println!("                            --stations AQW00061705,BQW00061705");
    println!();
    println!("    # Write the export to a file instead of stdout:");
    println!("    normals-processor parse --input hly-temp-normal.txt \\");
    println!("                            --stations AQW00061705 --output records.json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    normals-processor <COMMAND> --help");
}
