use railnet::*;
use railnet::input::arguments;
use std::path::PathBuf;
use structopt::StructOpt;
use log::*;

/// Railnet -- move trains between two stations in as few turns as possible
#[derive(StructOpt, Debug)]
#[structopt(name="railnet", setting = structopt::clap::AppSettings::AllowNegativeNumbers)]
struct Opt {
    /// Verbose mode (-v, -vv, -vvv)
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: u8,

    /// Also write the schedule as JSON to this file
    #[structopt(short = "j", long = "json", parse(from_os_str))]
    json: Option<PathBuf>,

    /// Network map file
    #[structopt(parse(from_os_str))]
    network: PathBuf,

    /// Start station name
    start: String,

    /// End station name
    end: String,

    /// Number of trains (a positive integer)
    trains: String,
}

fn run(opt :&Opt) -> AppResult<()> {
    let num_trains = arguments::parse_train_count(&opt.trains)?;
    let network = get_network(&opt.network)?;
    let (start, end) = arguments::endpoints(&network, &opt.start, &opt.end)?;

    let schedule = find_train_movements(&network, start, end, num_trains)?;

    {
        use std::io::Write;
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        output::schedule::write_schedule(&network, &schedule, &mut out)?;
        out.flush()?;
    }

    if let Some(ref json) = opt.json {
        use std::fs::File;
        use std::io::BufWriter;
        let file = File::create(json)?;
        let mut writer = BufWriter::new(&file);
        output::json::json_schedule(&network, &schedule, &mut writer)?;
        info!("Wrote JSON schedule to {}", json.display());
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

pub fn main() {
    let opt = Opt::from_args();
    init_logging(opt.verbose);
    debug!("{:?}", opt);
    match run(&opt) {
        Ok(()) => {},
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_train_count_reaches_validation() {
        let opt = Opt::from_iter_safe(&["railnet", "net", "a", "b", "-3"]).unwrap();
        assert_eq!(opt.trains, "-3");
        let err = run(&opt).unwrap_err();
        assert_eq!(format!("{}", err), "number of trains is not a valid positive integer.");
    }

    #[test]
    fn test_flags_and_positionals() {
        let opt = Opt::from_iter_safe(&["railnet", "-vv", "-j", "out.json", "net", "a", "b", "2"]).unwrap();
        assert_eq!(opt.verbose, 2);
        assert_eq!(opt.json, Some(PathBuf::from("out.json")));
        assert_eq!((opt.start.as_str(), opt.end.as_str(), opt.trains.as_str()), ("a", "b", "2"));
        assert!(Opt::from_iter_safe(&["railnet", "net", "a", "b"]).is_err());
    }
}
