//! Session configuration: the five values a pull request is prepared from

use std::fmt;

/// One of the five configuration fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Branch being committed and pushed (always the checked-out branch)
    SourceBranch,
    /// Branch the pull request should merge into
    TargetBranch,
    /// Message for the commit created from the working tree
    CommitMessage,
    /// Pull request title
    PrTitle,
    /// Pull request description
    PrDescription,
}

impl Field {
    /// All fields in display order
    pub const ALL: [Self; 5] = [
        Self::SourceBranch,
        Self::TargetBranch,
        Self::CommitMessage,
        Self::PrTitle,
        Self::PrDescription,
    ];

    /// Snake-case key, e.g. `commit_message`
    pub const fn key(self) -> &'static str {
        match self {
            Self::SourceBranch => "source_branch",
            Self::TargetBranch => "target_branch",
            Self::CommitMessage => "commit_message",
            Self::PrTitle => "pr_title",
            Self::PrDescription => "pr_description",
        }
    }

    /// Label shown in the menu
    pub const fn label(self) -> &'static str {
        match self {
            Self::SourceBranch => "Source Branch (current)",
            Self::TargetBranch => "Target Branch",
            Self::CommitMessage => "Commit Message",
            Self::PrTitle => "PR Title",
            Self::PrDescription => "PR Description",
        }
    }

    /// Prompt shown when the field is edited
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::SourceBranch => "Source branch",
            Self::TargetBranch => "Select target branch",
            Self::CommitMessage => "Enter commit message",
            Self::PrTitle => "Enter PR title",
            Self::PrDescription => "Enter PR description",
        }
    }

    /// Command-line flag name without dashes, e.g. `commit-message`
    pub fn flag_name(self) -> String {
        self.key().replace('_', "-")
    }

    /// Whether the menu lets the user change this field
    pub const fn is_editable(self) -> bool {
        !matches!(self, Self::SourceBranch)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Values collected for one run; every field starts out empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    source_branch: String,
    target_branch: String,
    commit_message: String,
    pr_title: String,
    pr_description: String,
}

impl Configuration {
    /// Empty configuration with the source branch filled in
    pub fn for_branch(source_branch: impl Into<String>) -> Self {
        Self {
            source_branch: source_branch.into(),
            ..Self::default()
        }
    }

    /// Current value of `field`
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::SourceBranch => &self.source_branch,
            Field::TargetBranch => &self.target_branch,
            Field::CommitMessage => &self.commit_message,
            Field::PrTitle => &self.pr_title,
            Field::PrDescription => &self.pr_description,
        }
    }

    /// Replace the value of `field`, stored verbatim
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::SourceBranch => &mut self.source_branch,
            Field::TargetBranch => &mut self.target_branch,
            Field::CommitMessage => &mut self.commit_message,
            Field::PrTitle => &mut self.pr_title,
            Field::PrDescription => &mut self.pr_description,
        };
        *slot = value.into();
    }

    /// `(field, value)` pairs in display order
    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// Copy every non-empty override onto this configuration
    pub fn apply(&mut self, overrides: &Overrides) {
        for (field, value) in overrides.values() {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                self.set(field, value);
            }
        }
    }
}

/// Field values supplied on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// `--target-branch`
    pub target_branch: Option<String>,
    /// `--commit-message`
    pub commit_message: Option<String>,
    /// `--pr-title`
    pub pr_title: Option<String>,
    /// `--pr-description`
    pub pr_description: Option<String>,
}

impl Overrides {
    fn values(&self) -> [(Field, Option<&str>); 4] {
        [
            (Field::TargetBranch, self.target_branch.as_deref()),
            (Field::CommitMessage, self.commit_message.as_deref()),
            (Field::PrTitle, self.pr_title.as_deref()),
            (Field::PrDescription, self.pr_description.as_deref()),
        ]
    }

    /// Whether any flag value was supplied
    pub fn is_empty(&self) -> bool {
        self.values().iter().all(|(_, v)| v.is_none())
    }
}
