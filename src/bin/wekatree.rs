//! Command-line interface for wekatree
//! Converts Weka's textual decision-tree output into XML (and other formats).
//!
//! Usage:
//!   wekatree `<source>` `<dest>` [--format `<format>`]  - Convert a dump file
//!   wekatree                                        - Interactive mode (prompts for paths)
//!   wekatree --list-formats                         - List available output formats

use clap::{Arg, ArgAction, Command};
use std::process;
use wekatree::weka::processor::{self, OutputFormat};

fn main() {
    let matches = Command::new("wekatree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Weka's textual decision-tree output into XML")
        .arg(
            Arg::new("source")
                .help("Path to the Weka dump file")
                .index(1)
                .requires("dest"),
        )
        .arg(
            Arg::new("dest")
                .help("Path to the output file")
                .index(2),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g. 'xml', 'json', 'treeviz')")
                .default_value("xml"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let format_name = matches
        .get_one::<String>("format")
        .expect("format has a default value");
    let format = OutputFormat::from_string(format_name).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("\nAvailable output formats:");
        for (name, description) in OutputFormat::available_formats() {
            eprintln!("  {} - {}", name, description);
        }
        process::exit(1);
    });

    match (
        matches.get_one::<String>("source"),
        matches.get_one::<String>("dest"),
    ) {
        (Some(source), Some(dest)) => handle_convert_command(source, dest, format),
        (None, None) => handle_interactive_mode(format),
        _ => unreachable!("clap requires source and dest together"),
    }
}

/// Convert one dump file, reporting progress the way the original console
/// logger did.
fn handle_convert_command(source: &str, dest: &str, format: OutputFormat) {
    println!("Converting '{}'...", source);
    match processor::convert_file(source, dest, format) {
        Ok(()) => println!("Output successfully written in '{}'", dest),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Prompt for source/destination pairs until an empty line or EOF.
fn handle_interactive_mode(format: OutputFormat) {
    use rustyline::DefaultEditor;

    let mut editor = DefaultEditor::new().unwrap_or_else(|e| {
        eprintln!("Error: failed to open the prompt: {}", e);
        process::exit(1);
    });
    println!("Interactive mode: enter source and destination paths (empty line quits).");

    loop {
        let source = match read_path(&mut editor, "Weka model (text): ") {
            Some(path) => path,
            None => return,
        };
        let dest = match read_path(&mut editor, "Output file: ") {
            Some(path) => path,
            None => return,
        };
        match processor::convert_file(&source, &dest, format) {
            Ok(()) => println!("Output successfully written in '{}'", dest),
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}

/// Read one non-empty path from the prompt; `None` quits interactive mode.
fn read_path(editor: &mut rustyline::DefaultEditor, prompt: &str) -> Option<String> {
    use rustyline::error::ReadlineError;

    match editor.readline(prompt) {
        Ok(line) => {
            let path = line.trim().to_string();
            if path.is_empty() {
                None
            } else {
                let _ = editor.add_history_entry(&path);
                Some(path)
            }
        }
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => None,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for (name, description) in OutputFormat::available_formats() {
        println!("  {}", name);
        println!("    {}", description);
    }
}
