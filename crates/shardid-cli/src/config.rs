use anyhow::bail;
use clap::{Parser, Subcommand, ValueEnum};
use shardid::{ShardedId, Uid};

/// Command line arguments for the `shardid` binary.
///
/// Every option that makes sense to pin per deployment can also be supplied
/// through the environment (or a `.env` file), so operators on a given shard
/// do not have to repeat it.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "shardid",
    version,
    about = "Mint and inspect sharded base58 identifiers"
)]
pub struct CliArgs {
    /// Output format for reports.
    ///
    /// `text` prints one human readable line per result; `json` prints one
    /// JSON object per line.
    ///
    /// Environment variable: `SHARDID_OUTPUT`
    #[arg(
        long,
        global = true,
        env = "SHARDID_OUTPUT",
        value_enum,
        default_value_t = OutputFormat::Text
    )]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Pack the components into a token.
    Encode {
        /// Row identifier of the entity (36 bits).
        local_id: u64,

        /// Entity kind tag (10 bits).
        object_type: u64,

        /// Shard the entity lives on (18 bits).
        ///
        /// Environment variable: `SHARDID_SHARD_ID`
        #[arg(long, env = "SHARDID_SHARD_ID", default_value_t = 0)]
        shard_id: u64,
    },

    /// Unpack one or more tokens into their components.
    Decode {
        /// Tokens to inspect.
        #[arg(required = true)]
        tokens: Vec<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Encode {
        local_id: u64,
        object_type: u64,
        shard_id: u64,
    },
    Decode {
        tokens: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub output: OutputFormat,
    pub action: Action,
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let action = match args.command {
            Command::Encode {
                local_id,
                object_type,
                shard_id,
            } => {
                if let Err(err) = Uid::try_from_components(local_id, object_type, shard_id) {
                    bail!("cannot encode ({local_id}, {object_type}, {shard_id}): {err}");
                }
                Action::Encode {
                    local_id,
                    object_type,
                    shard_id,
                }
            }
            Command::Decode { tokens } => Action::Decode { tokens },
        };

        Ok(Self {
            output: args.output,
            action,
        })
    }
}
