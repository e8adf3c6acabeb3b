fn main() {
    std::process::exit(sqlfmt_cli_lib::run_with_args(std::env::args_os()));
}

