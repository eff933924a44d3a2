use clap::{arg, crate_version, Command};
use lzwhuff::{container, report};
use std::path::PathBuf;

const RCH: &str = "unreachable was reached";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let long_help = "\
Examples:
---------
Compress:   `lzwhuff compress my_file my_file.lzh`
Decompress: `lzwhuff decompress my_file.lzh my_file`
Simulate:   `lzwhuff simulate my_file my_file.report.json`";

    let mut main_cmd = Command::new("lzwhuff")
        .about("Hybrid LZW/Huffman file compression")
        .after_long_help(long_help)
        .version(crate_version!());
    main_cmd = main_cmd.subcommand(
        Command::new("compress")
            .arg(arg!(<INPUT> "input path"))
            .arg(arg!(<OUTPUT> "output path"))
            .about("compress a file"),
    );
    main_cmd = main_cmd.subcommand(
        Command::new("decompress")
            .arg(arg!(<INPUT> "input path"))
            .arg(arg!(<OUTPUT> "output path"))
            .about("decompress a file"),
    );
    main_cmd = main_cmd.subcommand(
        Command::new("simulate")
            .arg(arg!(<INPUT> "input path"))
            .arg(arg!(<OUTPUT> "output path, written as JSON"))
            .about("report per-strategy sizes and tree structure without writing a container"),
    );

    let matches = main_cmd.get_matches();

    if let Some(cmd) = matches.subcommand_matches("compress") {
        let path_in = PathBuf::from(cmd.get_one::<String>("INPUT").expect(RCH));
        let path_out = PathBuf::from(cmd.get_one::<String>("OUTPUT").expect(RCH));
        container::compress_file(&path_in, &path_out)?;
    }

    if let Some(cmd) = matches.subcommand_matches("decompress") {
        let path_in = PathBuf::from(cmd.get_one::<String>("INPUT").expect(RCH));
        let path_out = PathBuf::from(cmd.get_one::<String>("OUTPUT").expect(RCH));
        container::decompress_file(&path_in, &path_out)?;
    }

    if let Some(cmd) = matches.subcommand_matches("simulate") {
        let path_in = PathBuf::from(cmd.get_one::<String>("INPUT").expect(RCH));
        let path_out = PathBuf::from(cmd.get_one::<String>("OUTPUT").expect(RCH));
        let data = std::fs::read(&path_in)?;
        let report = report::simulate(&data);
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(&path_out, json)?;
    }

    Ok(())
}
