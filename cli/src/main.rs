mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, connect, pair, record, spy};
use terminal::{logging, print};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging();
    print::banner(commands.no_banner);

    let cfg = commands.config();

    let result = match commands.command {
        Commands::Spy(args) => {
            print::header("bypass and capture");
            spy::spy(args, &cfg).await
        }
        Commands::Pair(args) => {
            print::header("forced pairing");
            pair::pair(args, &cfg).await
        }
        Commands::Connect(args) => {
            print::header("forced connection");
            connect::connect(args, &cfg).await
        }
        Commands::Record(args) => {
            print::header("capture");
            record::record(args, &cfg).await
        }
    };

    let code = match &result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print::failure(err);
            ExitCode::FAILURE
        }
    };
    print::end_of_program();
    code
}
