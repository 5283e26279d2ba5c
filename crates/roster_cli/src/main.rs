//! `roster` command-line entry point.
//!
//! Prints JSON on stdout and maps error kinds to exit codes:
//! 2 validation, 3 not found, 4 already exists, 1 anything else.

mod cli;

use clap::Parser;
use cli::{Cli, Command, EntityAction};
use log::error;
use roster_core::{
    core_version, default_log_level, init_logging, open_store, ping, ErrorKind, IdGenerator,
    LogTarget, LoggingError, RandomIdGenerator, RosterService, RosterStore, ServiceError,
    StoreBackend,
};
use serde_json::{json, Value};
use std::fmt::{Display, Formatter};
use std::process::ExitCode;

#[derive(Debug)]
enum CliError {
    Logging(LoggingError),
    Service(ServiceError),
    Output(serde_json::Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            Self::Service(err) => match err.kind() {
                ErrorKind::ValidationFailed => 2,
                ErrorKind::NotFound => 3,
                ErrorKind::AlreadyExists => 4,
                ErrorKind::StorageFailure => 1,
            },
            Self::Logging(_) => 2,
            Self::Output(_) => 1,
        }
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logging(err) => write!(f, "{err}"),
            Self::Service(err) => write!(f, "{} ({})", err, err.kind()),
            Self::Output(err) => write!(f, "failed to render output: {err}"),
        }
    }
}

impl From<ServiceError> for CliError {
    fn from(value: ServiceError) -> Self {
        Self::Service(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Output(value)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match try_main(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=cli_command module=cli status=error error={err}");
            eprintln!("roster: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn try_main(cli: Cli) -> Result<String, CliError> {
    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    let target = cli
        .log_dir
        .clone()
        .map_or(LogTarget::Stderr, LogTarget::Directory);
    init_logging(level, target).map_err(CliError::Logging)?;

    let backend = if cli.memory {
        StoreBackend::Memory
    } else {
        StoreBackend::Sqlite(cli.db.clone())
    };
    let store = open_store(&backend).map_err(ServiceError::from)?;
    let service = RosterService::new(store, RandomIdGenerator);

    let value = run(&service, cli.command)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

fn run<S: RosterStore, G: IdGenerator>(
    service: &RosterService<S, G>,
    command: Command,
) -> Result<Value, CliError> {
    let value = match command {
        Command::Ping => json!({ "ping": ping(), "version": core_version() }),
        Command::Course { action } => match action {
            EntityAction::Create { name } => serde_json::to_value(service.create_course(name)?)?,
            EntityAction::Get { id } => serde_json::to_value(service.get_course(&id)?)?,
            EntityAction::List => serde_json::to_value(service.list_courses()?)?,
        },
        Command::Student { action } => match action {
            EntityAction::Create { name } => serde_json::to_value(service.create_student(name)?)?,
            EntityAction::Get { id } => serde_json::to_value(service.get_student(&id)?)?,
            EntityAction::List => serde_json::to_value(service.list_students()?)?,
        },
        Command::Register {
            student_id,
            course_id,
        } => {
            service.register(&student_id, &course_id)?;
            serde_json::to_value(service.get_student(&student_id)?)?
        }
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{run, CliError};
    use crate::cli::{Command, EntityAction};
    use roster_core::{InMemoryRosterStore, RandomIdGenerator, RosterService};

    #[test]
    fn missing_student_maps_to_not_found_exit_code() {
        let service = RosterService::new(InMemoryRosterStore::new(), RandomIdGenerator);
        let err = run(
            &service,
            Command::Student {
                action: EntityAction::Get {
                    id: "12345678".to_string(),
                },
            },
        )
        .unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn malformed_name_maps_to_validation_exit_code() {
        let service = RosterService::new(InMemoryRosterStore::new(), RandomIdGenerator);
        let err = run(
            &service,
            Command::Course {
                action: EntityAction::Create {
                    name: "C++".to_string(),
                },
            },
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Service(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn register_prints_enrolled_student() {
        let service = RosterService::new(InMemoryRosterStore::new(), RandomIdGenerator);
        let course = service.create_course("Internet Engineering").unwrap();
        let student = service.create_student("Parham Alvani").unwrap();

        let value = run(
            &service,
            Command::Register {
                student_id: student.id.clone(),
                course_id: course.id.clone(),
            },
        )
        .unwrap();
        assert_eq!(value["id"], student.id.as_str());
        assert_eq!(value["courses"][0]["id"], course.id.as_str());
    }
}
