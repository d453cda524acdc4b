use std::error::Error;

use clap::{Args as ClapArgs, Parser, Subcommand};
use mps_core::Constellation;
use mps_rank::resolve_sequence;
use mps_seq::matching_sequence;
use mps_survey::{survey_range, to_canonical_json_bytes, SurveyOpts, SurveySummary};

#[derive(Parser, Debug)]
#[command(name = "mps", about = "Matching-permutation survey over constellation families")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Survey a range of size bounds and print the permutation-count sequence.
    Survey(SurveyArgs),
    /// Resolve one matching sequence into its consistent permutations.
    Resolve(ResolveArgs),
    /// Print the matching sequence of one constellation.
    Matchseq(MatchseqArgs),
}

#[derive(ClapArgs, Debug)]
struct SurveyArgs {
    /// Largest size bound to survey.
    #[arg(long)]
    max_n: u32,
    /// Smallest size bound to survey.
    #[arg(long, default_value_t = 1)]
    min_n: u32,
    /// Worker threads; 0 lets the pool size itself.
    #[arg(long, default_value_t = 0)]
    threads: usize,
    /// Emit the full summary as canonical JSON instead of plain counts.
    #[arg(long)]
    json: bool,
}

#[derive(ClapArgs, Debug)]
struct ResolveArgs {
    /// Matching sequence entries, comma separated (e.g. "1,4,6,4,1").
    sequence: String,
}

#[derive(ClapArgs, Debug)]
struct MatchseqArgs {
    /// Star sizes, comma separated (e.g. "3,1,4,1,5,9").
    sizes: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Survey(args) => run_survey(&args),
        Command::Resolve(args) => run_resolve(&args),
        Command::Matchseq(args) => run_matchseq(&args),
    }
}

fn run_survey(args: &SurveyArgs) -> Result<(), Box<dyn Error>> {
    let opts = SurveyOpts {
        threads: args.threads,
    };
    let results = survey_range(args.min_n, args.max_n, &opts)?;
    let summary = SurveySummary::from_results(&results);
    if args.json {
        let bytes = to_canonical_json_bytes(&summary)?;
        println!("{}", String::from_utf8(bytes)?);
    } else {
        for entry in &summary.entries {
            println!(
                "n={}: {} permutations ({} constellations)",
                entry.n, entry.permutations, entry.families
            );
        }
    }
    Ok(())
}

fn run_resolve(args: &ResolveArgs) -> Result<(), Box<dyn Error>> {
    let entries = parse_entries::<u64>(&args.sequence)?;
    for permutation in resolve_sequence(&entries) {
        println!("{:?}", permutation.one_line());
    }
    Ok(())
}

fn run_matchseq(args: &MatchseqArgs) -> Result<(), Box<dyn Error>> {
    let sizes = parse_entries::<u32>(&args.sizes)?;
    let constellation = Constellation::new(sizes)?;
    println!("{:?}", matching_sequence(&constellation).entries());
    Ok(())
}

fn parse_entries<T: std::str::FromStr>(raw: &str) -> Result<Vec<T>, Box<dyn Error>>
where
    T::Err: Error + 'static,
{
    raw.split(',')
        .map(|piece| {
            let piece = piece.trim();
            if piece.is_empty() {
                return Err(format!("empty entry in comma-separated list {raw:?}").into());
            }
            piece.parse::<T>().map_err(Into::into)
        })
        .collect()
}
