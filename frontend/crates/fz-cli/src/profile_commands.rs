use crate::error::{CliError, Result as CliResult};

use clap::{Args, Subcommand};
use fz_session::Profile;

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Load the business profile of the logged-in user
    Show,

    /// Change name or email on the cached identity only
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },

    /// Edit the business profile on the backend
    Save {
        #[command(flatten)]
        edits: ProfileEdits,
    },
}

/// Field edits applied on top of the current business profile
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct ProfileEdits {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub bio: Option<String>,
    /// Comma-separated list, replaces the current skills
    #[arg(long, value_delimiter = ',')]
    pub skills: Option<Vec<String>>,
    /// Freelancers only
    #[arg(long)]
    pub hourly_rate: Option<f64>,
    /// Clients only
    #[arg(long)]
    pub professional_title: Option<String>,
}

impl ProfileEdits {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overwrite the fields that were given. Fields that belong to the
    /// other role are rejected rather than silently dropped.
    pub fn apply(self, profile: &mut Profile) -> CliResult<()> {
        match profile {
            Profile::Client(client) => {
                if self.hourly_rate.is_some() {
                    return Err(CliError::usage("--hourly-rate applies to freelancers only"));
                }
                overwrite(&mut client.name, self.name);
                overwrite(&mut client.email, self.email);
                overwrite(&mut client.location, self.location);
                overwrite(&mut client.bio, self.bio);
                overwrite(&mut client.professional_title, self.professional_title);
                if let Some(skills) = self.skills {
                    client.skills = skills;
                }
            }
            Profile::Freelancer(freelancer) => {
                if self.professional_title.is_some() {
                    return Err(CliError::usage(
                        "--professional-title applies to clients only",
                    ));
                }
                overwrite(&mut freelancer.name, self.name);
                overwrite(&mut freelancer.email, self.email);
                overwrite(&mut freelancer.location, self.location);
                overwrite(&mut freelancer.bio, self.bio);
                if self.hourly_rate.is_some() {
                    freelancer.hourly_rate = self.hourly_rate;
                }
                if let Some(skills) = self.skills {
                    freelancer.skills = skills;
                }
            }
            Profile::Other => {
                return Err(CliError::usage("This account has no business profile"));
            }
        }

        Ok(())
    }
}

fn overwrite(target: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *target = value;
    }
}
