// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use chrono::NaiveDate;

use crate::config::options::{Job, Params};
use crate::progress::Progress;
use crate::runner;

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let mut progress = ConsoleProgress::default();
    let summary = runner::run(&params, Some(&mut progress))?;

    println!(
        "{} saved, {} skipped, {} failed, {} not published",
        summary.saved, summary.skipped, summary.failed, summary.not_found
    );
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn Error>> {
    let mut from: Option<NaiveDate> = None;
    let mut to: Option<NaiveDate> = None;

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--feed" => params.job = Job::Feed,
            "-y" | "--year" => {
                let v: i32 = args.next().ok_or("Missing value for --year")?.parse()?;
                if !(2018..=2100).contains(&v) { return Err("Year out of range (2018..2100)".into()); }
                params.job = Job::Year(v); }
            "--from" => from = Some(parse_date(&args.next().ok_or("Missing value for --from")?)?),
            "--to" => to = Some(parse_date(&args.next().ok_or("Missing value for --to")?)?),
            "-d" | "--date" => {
                let v = parse_date(&args.next().ok_or("Missing value for --date")?)?;
                params.job = Job::One(v); }
            "--probe" => params.probe = true,
            "--data-dir" => params.data_dir = PathBuf::from(args.next().ok_or("Missing value for --data-dir")?),
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    match (from, to) {
        (Some(f), Some(t)) => params.job = Job::Range(f, t),
        (None, None) => {}
        _ => return Err("--from and --to must be given together".into()),
    }

    Ok(())
}

fn parse_date(s: &str) -> Result<NaiveDate, Box<dyn Error>> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Bad date (want YYYY-MM-DD): {}", s).into())
}

/* ---------------- Console progress sink ---------------- */

#[derive(Default)]
struct ConsoleProgress {
    total: usize,
    seen: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("Processing {} dates…", total);
    }

    fn log(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn item_done(&mut self, date: &str) {
        self.seen += 1;
        println!("[{}/{}] {} saved", self.seen, self.total.max(self.seen), date);
    }

    fn item_failed(&mut self, date: &str, why: &str) {
        self.seen += 1;
        println!("[{}/{}] {} FAILED: {}", self.seen, self.total.max(self.seen), date, why);
    }
}
