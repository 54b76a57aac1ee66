use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    richlist::app::init_tracing();
    richlist::app::run(std::env::args_os().nth(1).map(PathBuf::from))
}
