use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // 0 is the program itself; the first argument picks the handler
    let arg = std::env::args().nth(1);
    match sidebar_app::run(arg.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("sidebar: {e:#}");
            ExitCode::FAILURE
        }
    }
}
