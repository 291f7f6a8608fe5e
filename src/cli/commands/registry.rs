//! The set of known commands.

use super::{
    api, auth, delete_org, delete_service_broker, delete_space, env, help, logout, logs,
    rename_org, rename_space, target, Command, CommandMetadata,
};

pub type Factory = fn() -> Box<dyn Command>;

/// Built-in commands, in the order `help` lists them.
const BUILTIN: &[(CommandMetadata, Factory)] = &[
    (api::METADATA, || Box::new(api::ApiCommand::default())),
    (auth::METADATA, || Box::new(auth::AuthCommand::default())),
    (logout::METADATA, || Box::new(logout::LogoutCommand)),
    (target::METADATA, || Box::new(target::TargetCommand::default())),
    (env::METADATA, || Box::new(env::EnvCommand::default())),
    (logs::METADATA, || Box::new(logs::LogsCommand::default())),
    (delete_org::METADATA, || {
        Box::new(delete_org::DeleteOrgCommand::default())
    }),
    (rename_org::METADATA, || {
        Box::new(rename_org::RenameOrgCommand::default())
    }),
    (delete_space::METADATA, || {
        Box::new(delete_space::DeleteSpaceCommand::default())
    }),
    (rename_space::METADATA, || {
        Box::new(rename_space::RenameSpaceCommand::default())
    }),
    (delete_service_broker::METADATA, || {
        Box::new(delete_service_broker::DeleteServiceBrokerCommand::default())
    }),
    (help::METADATA, || {
        Box::new(help::HelpCommand::new(CommandRegistry::new().metadata()))
    }),
];

/// Maps command names to fresh command values.
pub struct CommandRegistry {
    entries: Vec<(CommandMetadata, Factory)>,
}

impl CommandRegistry {
    /// Registry holding every built-in command.
    pub fn new() -> Self {
        Self {
            entries: BUILTIN.to_vec(),
        }
    }

    /// Registry holding only the given commands.
    pub fn with_commands(entries: Vec<(CommandMetadata, Factory)>) -> Self {
        Self { entries }
    }

    /// A new command value for `name`, if one is registered.
    pub fn find(&self, name: &str) -> Option<Box<dyn Command>> {
        self.entries
            .iter()
            .find(|(metadata, _)| metadata.name == name)
            .map(|(_, factory)| factory())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(metadata, _)| metadata.name == name)
    }

    pub fn metadata(&self) -> Vec<CommandMetadata> {
        self.entries.iter().map(|(metadata, _)| *metadata).collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
