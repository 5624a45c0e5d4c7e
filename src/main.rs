use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use svcs::areas::repository::Repository;
use svcs::artifacts::status::status_info::FileSet;
use svcs::config::Config;

#[derive(Parser)]
#[command(
    name = "svcs",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A simple snapshot-based version control system",
    long_about = "This tool tracks snapshots of a working tree as content-addressed commits \
    organized into branches. Merging only reports which files would merge cleanly and which \
    conflict; it never rewrites the working tree.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "This command stages the given files. Every file is attempted; \
        failures are reported per file and make the command exit with an error."
    )]
    Add {
        #[arg(required = true, num_args = 1.., help = "The files to stage")]
        files: Vec<PathBuf>,
    },
    #[command(
        name = "commit",
        about = "Commit the staged changes",
        long_about = "This command records the staged files as a new commit on the current branch."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
        #[arg(short, long, help = "The commit author (defaults to SVCS_AUTHOR_NAME or USER)")]
        author: Option<String>,
    },
    #[command(name = "status", about = "Show the working tree status")]
    Status,
    #[command(
        name = "branch",
        about = "Create or list branches",
        long_about = "With a name, this command creates a branch at the current head. \
        Without one, it lists all branches and marks the current one."
    )]
    Branch {
        #[arg(index = 1, help = "The name of the branch to create")]
        name: Option<String>,
    },
    #[command(
        name = "switch",
        visible_alias = "checkout",
        about = "Switch to another branch",
        long_about = "This command makes the given branch current. The working tree must have \
        no staged or modified files."
    )]
    Switch {
        #[arg(index = 1, help = "The branch to switch to")]
        branch: String,
    },
    #[command(
        name = "merge",
        about = "Analyse a merge of a branch into the current one",
        long_about = "This command compares both branch tips with their common ancestor and \
        reports merged and conflicting files. It does not create a commit."
    )]
    Merge {
        #[arg(index = 1, help = "The branch to merge from")]
        branch: String,
    },
    #[command(name = "clone", about = "Clone a repository into a new directory")]
    Clone {
        #[arg(index = 1, help = "The source repository path")]
        source: PathBuf,
        #[arg(index = 2, help = "The destination path")]
        destination: PathBuf,
    },
    #[command(name = "show", about = "Print a file as recorded at a commit")]
    Show {
        #[arg(index = 1, help = "The file path")]
        file: PathBuf,
        #[arg(long, help = "Branch, commit id or id prefix (defaults to the current head)")]
        commit: Option<String>,
    },
    #[command(name = "log", about = "Show the commit history")]
    Log {
        #[arg(index = 1, help = "Branch, commit id or id prefix to start from")]
        revision: Option<String>,
        #[arg(short = 'n', long = "max-count", help = "Limit the number of commits shown")]
        max_count: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    svcs::logging::init(&Config::log_filter_from_env());
    let config = Config::from_env();

    let pwd = std::env::current_dir()?;

    match cli.command {
        Commands::Init { path } => {
            let repository = Repository::with_config(&path.unwrap_or(pwd), config)?;
            repository.init()?;

            println!(
                "Initialized empty repository in {}",
                repository.path().display()
            );
        }
        Commands::Add { files } => {
            let repository = Repository::with_config(&pwd, config)?;
            let report = repository.add(&files)?;

            for key in &report.staged {
                println!("Staged: {key}");
            }
            for (path, error) in &report.failed {
                eprintln!("Error staging {}: {error}", path.display());
            }

            if !report.is_success() {
                anyhow::bail!(
                    "failed to stage {} of {} files",
                    report.failed.len(),
                    files.len()
                );
            }
        }
        Commands::Commit { message, author } => {
            let repository = Repository::with_config(&pwd, config)?;
            let commit_id = repository.commit(&message, author.as_deref())?;

            println!("Created commit {}", commit_id.to_short());
        }
        Commands::Status => {
            let repository = Repository::with_config(&pwd, config)?;
            let report = repository.working_tree_status()?;

            println!("On branch {}", report.branch.bold());
            print_file_set("Staged files:", &report.info.staged, |file| file.green().to_string());
            print_file_set("Modified files:", &report.info.modified, |file| file.red().to_string());
            print_file_set("Untracked files:", &report.info.untracked, |file| {
                file.red().to_string()
            });

            if report.info.is_empty() {
                println!("Working directory clean");
            }
        }
        Commands::Branch { name: Some(name) } => {
            let repository = Repository::with_config(&pwd, config)?;
            repository.create_branch(&name)?;

            println!("Created branch {name}");
        }
        Commands::Branch { name: None } => {
            let repository = Repository::with_config(&pwd, config)?;
            let current = repository.current_branch()?;

            for (name, head) in repository.list_branches()? {
                let head = head
                    .map(|id| id.to_short())
                    .unwrap_or_else(|| "no commits".to_string());

                if name == current {
                    println!("* {} ({head})", name.green());
                } else {
                    println!("  {name} ({head})");
                }
            }
        }
        Commands::Switch { branch } => {
            let repository = Repository::with_config(&pwd, config)?;
            repository.switch_branch(&branch)?;

            println!("Switched to branch {branch}");
        }
        Commands::Merge { branch } => {
            let repository = Repository::with_config(&pwd, config)?;
            let report = repository.merge_branch(&branch)?;
            let outcome = report.outcome;

            if !outcome.is_clean() {
                print_file_set("Merge conflicts in:", &outcome.conflicts, |file| {
                    file.red().to_string()
                });
                println!("\nPlease resolve conflicts and commit the changes");
            } else {
                print_file_set("Successfully merged files:", &outcome.merged, |file| {
                    file.green().to_string()
                });
                println!("\nMerged branch {branch}");
            }
        }
        Commands::Clone {
            source,
            destination,
        } => {
            let repository = Repository::with_config(&source, config)?;
            repository.clone_into(&destination)?;

            println!(
                "Cloned repository from {} to {}",
                source.display(),
                destination.display()
            );
        }
        Commands::Show { file, commit } => {
            let repository = Repository::with_config(&pwd, config)?;
            let content = repository.get_file_content(&file, commit.as_deref())?;

            match std::str::from_utf8(&content) {
                Ok(text) => println!("{text}"),
                Err(_) => println!("Binary file"),
            }
        }
        Commands::Log {
            revision,
            max_count,
        } => {
            let repository = Repository::with_config(&pwd, config)?;

            for entry in repository.log(revision.as_deref(), max_count)? {
                println!("{}", format!("commit {}", entry.id).yellow());
                println!("Author: {}", entry.commit.author);
                println!("Date:   {}", entry.commit.readable_timestamp());
                println!();
                for line in entry.commit.message.lines() {
                    println!("    {line}");
                }
                println!();
            }
        }
    }

    Ok(())
}

fn print_file_set(title: &str, files: &FileSet, paint: impl Fn(&str) -> String) {
    if files.is_empty() {
        return;
    }

    println!("\n{}", title.bold());
    for file in files {
        println!("  {}", paint(file));
    }
}
