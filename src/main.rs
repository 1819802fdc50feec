use tokio::io::{AsyncBufReadExt, BufReader};

use httpc::cli::{Dispatcher, Grammar};
use httpc::config::Config;

/// One command per stdin line, fully resolved before the next line is
/// read. `quit` (or EOF) ends the loop.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let cfg = Config::load();
    let dispatcher = Dispatcher::new(Grammar::default(), cfg);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line == "quit" {
            break;
        }
        if line.is_empty() {
            continue;
        }
        dispatcher.run_line(line).await;
    }

    Ok(())
}
