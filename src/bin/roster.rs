//! Roster CLI
//!
//! One-shot command-line access to a roster data file. Each invocation
//! loads the file, runs one command, and saves again if anything changed.

use clap::{Parser, Subcommand};
use roster::{Config, Record, Roster, SortDirection};
use tracing_subscriber::{fmt, EnvFilter};

/// Roster CLI
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Student records, grades and statistics")]
#[command(version)]
struct Args {
    /// Data file (.csv or .txt)
    #[arg(short, long, default_value = "students.txt")]
    file: String,

    /// Number of store buckets
    #[arg(short, long, default_value = "100")]
    buckets: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a new student
    Add {
        /// Unique student ID
        id: String,

        /// Full name
        name: String,

        /// Gender
        gender: String,

        /// Age in years (positive)
        age: u32,
    },

    /// Delete a student by ID
    Delete {
        /// The student ID
        id: String,
    },

    /// Show one student and their grades
    Show {
        /// The student ID
        id: String,
    },

    /// Record a grade (0-100) for a student
    Grade {
        /// The student ID
        id: String,

        /// Course name
        course: String,

        /// Grade value
        grade: f64,
    },

    /// List all students
    List,

    /// List every course with at least one grade
    Courses,

    /// Rank students by their grade in a course
    Sort {
        /// Course name
        course: String,

        /// asc or desc
        #[arg(short, long, default_value = "asc")]
        order: SortDirection,
    },

    /// Grade statistics for a course
    Stats {
        /// Course name
        course: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write all records to another .csv or .txt file
    Export {
        /// Destination path
        path: String,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,roster=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("Roster v{}", roster::VERSION);
    tracing::debug!("Data file: {}", args.file);

    let config = Config::builder()
        .data_file(&args.file)
        .bucket_count(args.buckets)
        .build();

    let mut roster = match Roster::open(config) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Failed to load {}: {}", args.file, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&mut roster, args.command) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(roster: &mut Roster, command: Commands) -> roster::Result<()> {
    let changed = match command {
        Commands::Add { id, name, gender, age } => {
            roster.add_record(Record::new(id.trim(), name.trim(), gender.trim(), age))?;
            println!("Student '{}' with ID '{}' added.", name.trim(), id.trim());
            true
        }
        Commands::Delete { id } => {
            if roster.remove(&id) {
                println!("Student '{}' deleted.", id);
                true
            } else {
                println!("Student with ID '{}' not found.", id);
                false
            }
        }
        Commands::Show { id } => {
            match roster.get(&id) {
                Some(record) => print_record(record),
                None => println!("Student with ID '{}' not found.", id),
            }
            false
        }
        Commands::Grade { id, course, grade } => {
            roster.add_grade(&id, &course, grade)?;
            println!("Grade for '{}' recorded for '{}'.", course.trim(), id);
            true
        }
        Commands::List => {
            let records = roster.records();
            if records.is_empty() {
                println!("No students.");
            }
            for record in records {
                print_record(record);
            }
            false
        }
        Commands::Courses => {
            for course in roster.courses() {
                println!("{}", course);
            }
            false
        }
        Commands::Sort { course, order } => {
            for (rank, record) in roster.ranking(&course, order).into_iter().enumerate() {
                let grade = record
                    .grade(&course)
                    .map(|g| g.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!("{:>3}. {:<12} {:<24} {}", rank + 1, record.id(), record.name, grade);
            }
            false
        }
        Commands::Stats { course, json } => {
            match roster.statistics(&course) {
                Some(stats) if json => {
                    let text = serde_json::to_string_pretty(&stats)
                        .map_err(|e| roster::RosterError::Serialization(e.to_string()))?;
                    println!("{}", text);
                }
                Some(stats) => {
                    println!("Grade statistics for {} ({} students):", course, stats.count);
                    println!("  Average: {:.2}", stats.mean);
                    println!("  Median:  {:.2}", stats.median);
                    println!("  Mode:    {}", stats.mode);
                    for (band, count) in stats.histogram.iter() {
                        println!("  {:<9} {}", band.label(), count);
                    }
                }
                None => println!("No grades found for course '{}'.", course),
            }
            false
        }
        Commands::Export { path } => {
            let written = roster.save_to(&path)?;
            println!("Saved {} students to {}.", written, path);
            false
        }
    };

    if changed {
        roster.save()?;
    }

    Ok(())
}

fn print_record(record: &Record) {
    println!(
        "{} | {} | {} | {} | total {}",
        record.id(),
        record.name,
        record.gender,
        record.age,
        record.total_grade()
    );
    for (course, grade) in record.grades() {
        println!("    {}: {}", course, grade);
    }
}
