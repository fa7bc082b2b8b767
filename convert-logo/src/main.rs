use clap::Parser;
use simplelog::{Config, LevelFilter::Info, TermLogger, TerminalMode};
use std::path::PathBuf;

/// Make the near-black background of an image transparent.
#[derive(Parser, Debug, PartialEq)]
#[command(version)]
struct Opt {
    /// Image to convert, in any supported format.
    #[arg()]
    input: PathBuf,
    /// Where to write the result. Always PNG.
    #[arg()]
    output: PathBuf,
}

pub fn main() -> anyhow::Result<()> {
    // Stdout only carries the confirmation line.
    TermLogger::init(Info, Config::default(), TerminalMode::Stderr)?;

    let Opt { input, output } = Parser::parse();
    log::info!("Converting {}", input.display());
    black2alpha::make_transparent(&input, &output)?;
    println!("Saved transparent logo to {}", output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::path::PathBuf;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn parse() {
        let opt = assert_ok!(super::Opt::try_parse_from(["convert-logo", "logo.jpg", "logo.png"]));
        assert_eq!(
            opt,
            super::Opt {
                input: PathBuf::from("logo.jpg"),
                output: PathBuf::from("logo.png"),
            }
        );
        assert_err!(super::Opt::try_parse_from(["convert-logo", "logo.jpg"]));
        assert_err!(super::Opt::try_parse_from(["convert-logo", "a.png", "b.png", "c.png"]));
        assert_err!(super::Opt::try_parse_from([
            "convert-logo",
            "--threshold",
            "40",
            "a.png",
            "b.png"
        ]));
    }
}
