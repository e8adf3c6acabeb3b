use std::fs;
use std::io::Read;
use std::path::Path;

use clap::Parser as _;

use crate::commands::{Cli, Commands, FmtArgs};
use sqlfmt::{Error, FormatOptions, FormatOptionsInput};

pub mod commands;
mod logger;

pub fn run_with_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let _ = logger::init();
    let cli = Cli::parse_from(args);

    let result = match cli.command {
        Commands::Fmt(args) => run_fmt(&args),
        Commands::Check(args) => run_check(&args),
    };
    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            1
        }
    }
}

fn options_from_args(args: &FmtArgs) -> Result<FormatOptions, Error> {
    let input = FormatOptionsInput {
        language: args.dialect.clone(),
        tab_width: args.tab_width,
        use_tabs: args.use_tabs,
        keyword_case: args.keyword_case.clone(),
        identifier_case: args.identifier_case.clone(),
        function_case: args.function_case.clone(),
        data_type_case: args.data_type_case.clone(),
        expression_width: args.expression_width,
        multiline_lists: args.multiline_lists.clone(),
        alias_as: args.alias_as.clone(),
        ..Default::default()
    };
    FormatOptions::try_from(input)
}

fn read_input(path: &Option<std::path::PathBuf>) -> Result<String, Error> {
    match path.as_deref() {
        None => read_stdin(),
        Some(p) if p == Path::new("-") => read_stdin(),
        Some(p) => fs::read_to_string(p)
            .map_err(|err| Error::Input(format!("{}: {err}", p.display()))),
    }
}

fn read_stdin() -> Result<String, Error> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(|err| Error::Input(format!("reading stdin: {err}")))?;
    Ok(buf)
}

fn run_fmt(args: &FmtArgs) -> Result<i32, Error> {
    let opts = options_from_args(args)?;
    let query = read_input(&args.path)?;
    let out = sqlfmt::format(&query, &opts)?;
    println!("{out}");
    Ok(0)
}

fn run_check(args: &FmtArgs) -> Result<i32, Error> {
    let opts = options_from_args(args)?;
    let query = read_input(&args.path)?;
    let out = sqlfmt::format(&query, &opts)?;
    if out.trim_end() == query.trim_end() {
        Ok(0)
    } else {
        eprintln!("would reformat");
        Ok(1)
    }
}
