use alumno_db::analytics::{render_all, summarize, SUMMARY_FIELDS};
use alumno_db::cli::{Cli, Command};
use alumno_db::config::DataPaths;
use alumno_db::predictor::{ScorePredictor, DEFAULT_MIN_SAMPLES};
use alumno_db::student::{validate, NewStudent, StudentRecord, StudentStore};
use alumno_db::Error;
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_records(records: &[StudentRecord]) {
    if records.is_empty() {
        println!("No student records yet.");
        return;
    }
    for record in records {
        println!(
            "#{:<4} {:<24} age {:<3} study {:>5.1}h  attendance {:>5.1}%  score {:>5.1}",
            record.id(),
            record.name(),
            record.age(),
            record.study_hours(),
            record.attendance(),
            record.exam_score()
        );
    }
}

fn print_stats(records: &[StudentRecord]) {
    let summary = summarize(records);
    if summary.is_empty() {
        println!("No student data available yet.");
        return;
    }
    for field in SUMMARY_FIELDS {
        let stat =
            |name: &str| summary.get(&format!("{field}_{name}")).copied().unwrap_or(f64::NAN);
        println!(
            "{field:<12} min {:>7.2}  mean {:>7.2}  max {:>7.2}",
            stat("min"),
            stat("mean"),
            stat("max")
        );
    }
}

fn run_charts(store: &StudentStore, paths: &DataPaths) -> Result<()> {
    let records = store.list_all()?;
    let artifacts = render_all(&records, paths.plots_dir())?;
    if artifacts.is_empty() {
        println!("No student data available yet. Nothing to chart.");
        return Ok(());
    }
    for path in artifacts {
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn run_train(store: &StudentStore, paths: &DataPaths, min_samples: usize) -> Result<()> {
    let records = store.list_all()?;
    let mut predictor = ScorePredictor::new(paths.snapshot_path());
    if predictor.train(&records, min_samples)? {
        println!("Model trained on {} records.", records.len());
    } else {
        println!("Not enough data to train the model. Add more student records.");
    }
    Ok(())
}

fn run_predict(
    store: &StudentStore,
    paths: &DataPaths,
    study_hours: f64,
    attendance: f64,
) -> Result<()> {
    validate::prediction_input(study_hours, attendance)?;

    // The prediction form always retrains over the current table first.
    let records = store.list_all()?;
    let mut predictor = ScorePredictor::new(paths.snapshot_path());
    if !predictor.train(&records, DEFAULT_MIN_SAMPLES)? {
        println!("Not enough data to train the model. Add more student records.");
        return Ok(());
    }

    match predictor.predict(study_hours, attendance) {
        Ok(score) => println!("Predicted exam score: {score:.2}"),
        Err(Error::ModelNotTrained) => {
            println!("Not enough data to train the model. Add more student records.");
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let paths = DataPaths::new(&args.data_dir);
    paths.ensure()?;
    let store = StudentStore::open(paths.database_path())?;

    match args.command {
        Command::Add {
            name,
            age,
            study_hours,
            attendance,
            exam_score,
        } => {
            let student = NewStudent::new(name, age, study_hours, attendance, exam_score)?;
            let id = store.insert(&student)?;
            println!("Student record added successfully (id {id}).");
        }
        Command::List => print_records(&store.list_all()?),
        Command::Stats => print_stats(&store.list_all()?),
        Command::Charts => run_charts(&store, &paths)?,
        Command::Train { min_samples } => run_train(&store, &paths, min_samples)?,
        Command::Predict {
            study_hours,
            attendance,
        } => run_predict(&store, &paths, study_hours, attendance)?,
    }

    Ok(())
}
