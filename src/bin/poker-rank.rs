use anyhow::Context;
use clap::builder::PossibleValuesParser;
use clap::Parser;
use poker_rank::evaluator::classify_str;
use poker_rank::rules::RuleSet;
use poker_rank::showdown::winners;

#[derive(Debug, Parser)]
#[clap(version, about = "Classify poker hands and pick the winners")]
struct Cli {
    /// Rule set to classify under.
    #[clap(long, short, default_value = "standard", value_parser = PossibleValuesParser::new(RuleSet::names().iter().copied()))]
    game: String,
    /// Log how each hand was classified.
    #[clap(long, short)]
    verbose: bool,
    /// Hands as space separated cards, e.g. "Ah Kd 10c 9s 2h".
    #[clap(required = true)]
    hands: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
    env_logger::builder().filter_level(level).format_target(false).format_timestamp_millis().init();

    let rules = RuleSet::named(&cli.game);
    let hands = cli
        .hands
        .iter()
        .map(|notation| classify_str(notation, &rules).with_context(|| format!("hand '{notation}'")))
        .collect::<anyhow::Result<Vec<_>>>()?;

    for (i, hand) in hands.iter().enumerate() {
        println!("{:>2}. {:<32} [{hand}]", i + 1, hand.description());
    }

    let won = winners(&hands)?;
    if won.is_empty() {
        println!("no qualifying hand");
        return Ok(());
    }
    for hand in won {
        println!("winner: {} [{hand}]", hand.description());
    }
    Ok(())
}
