use std::path::PathBuf;

use clap::{Parser, Subcommand};

use bump_version::cli::{
    run_bump_workflow, run_status_workflow, PromptField, WorkflowOptions, WorkflowOutcome,
};
use bump_version::config::{self, Config};
use bump_version::locator;
use bump_version::logging;
use bump_version::platform::{AndroidBuildGradle, IosProject, VersionFile};
use bump_version::ui::{self, Prompter, Theme};

/// Exit code for read/write/config failures
const EXIT_FAILURE: i32 = 1;
/// Exit code for rejected or missing input
const EXIT_ABORTED: i32 = 2;

#[derive(Parser)]
#[command(
    name = "bump-version",
    version,
    about = "Update the version of Android and iOS app projects"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, global = true, help = "Project root containing android/ and ios/")]
    root: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Only read MARKETING_VERSION values in x.y.z form"
    )]
    strict_read: bool,

    #[arg(long, global = true, help = "Enable debug logging")]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Update versionName and versionCode in android/app/build.gradle
    Android {
        #[arg(short, long, help = "Only show the current Android version")]
        status: bool,
    },
    /// Update MARKETING_VERSION and CURRENT_PROJECT_VERSION of an Xcode project
    Ios {
        /// Name of the <PROJECT_NAME>.xcodeproj under ios/
        project_name: String,

        #[arg(short, long, help = "Only show the current iOS version")]
        status: bool,
    },
    /// Show the current Android version
    AndroidVersion,
    /// Show the current iOS version
    IosVersion {
        /// Name of the <PROJECT_NAME>.xcodeproj under ios/
        project_name: String,
    },
}

fn main() {
    let args = Args::parse();
    logging::init(args.debug);

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(EXIT_FAILURE);
        }
    };

    std::process::exit(run(args, config));
}

fn run(args: Args, config: Config) -> i32 {
    let root = args.root.unwrap_or_else(|| config.paths.root.clone());
    let strict_read = args.strict_read || config.ios.strict_marketing_read;
    let options = WorkflowOptions {
        clear_screen: config.behavior.clear_screen,
        show_banner: config.behavior.show_banner,
    };
    tracing::debug!(root = %root.display(), strict_read, "resolved settings");

    let (platform, status_only) = match args.command {
        Command::Android { status } => (None, status),
        Command::AndroidVersion => (None, true),
        Command::Ios {
            project_name,
            status,
        } => (Some(project_name), status),
        Command::IosVersion { project_name } => (Some(project_name), true),
    };

    match platform {
        None => {
            let path = locator::android_build_gradle(&root, &config.paths.android_build_gradle);
            match AndroidBuildGradle::new(path) {
                Ok(file) => execute(&file, status_only, &options),
                Err(e) => fail(e.into()),
            }
        }
        Some(project_name) => {
            let path = locator::ios_pbxproj(&root, &config.paths.ios_dir, &project_name);
            match IosProject::with_strict_read(path, strict_read) {
                Ok(file) => execute(&file, status_only, &options),
                Err(e) => fail(e.into()),
            }
        }
    }
}

fn execute<V: VersionFile>(file: &V, status_only: bool, options: &WorkflowOptions) -> i32 {
    let theme = Theme::default();
    let mut prompter = Prompter::stdio();

    if status_only {
        return match run_status_workflow(file, &mut prompter, &theme, options) {
            Ok(_) => 0,
            Err(e) => fail(e),
        };
    }

    match run_bump_workflow(file, &mut prompter, &theme, options) {
        Ok(WorkflowOutcome::Updated { .. }) => 0,
        Ok(WorkflowOutcome::Aborted { field, reason }) => {
            let labels = file.labels();
            let label = match field {
                PromptField::Marketing => labels.marketing,
                PromptField::Build => labels.build,
            };
            eprintln!();
            ui::display_error(&format!("{} {}", label, reason));
            ui::display_status("Nothing was written.");
            EXIT_ABORTED
        }
        Err(e) => fail(e),
    }
}

fn fail(error: anyhow::Error) -> i32 {
    ui::display_error(&format!("{:#}", error));
    EXIT_FAILURE
}
