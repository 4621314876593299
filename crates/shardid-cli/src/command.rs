use crate::config::{Action, CliConfig, OutputFormat};
use serde::Serialize;
use shardid::{Uid, decode, encode};
use std::io::Write;

#[derive(Debug, Serialize)]
struct EncodeReport<'a> {
    token: &'a str,
    local_id: u64,
    object_type: u64,
    shard_id: u64,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum DecodeReport<'a> {
    Decoded {
        token: &'a str,
        local_id: u64,
        object_type: u64,
        shard_id: u64,
        raw: u64,
    },
    Rejected {
        token: &'a str,
        error: String,
    },
}

impl<'a> DecodeReport<'a> {
    fn new(token: &'a str) -> Self {
        match decode(token) {
            Ok(id) => Self::decoded(token, id),
            Err(err) => {
                tracing::warn!(token, error = %err, "rejected token");
                Self::Rejected {
                    token,
                    error: err.to_string(),
                }
            }
        }
    }

    fn decoded(token: &'a str, id: Uid) -> Self {
        Self::Decoded {
            token,
            local_id: id.local_id(),
            object_type: id.object_type(),
            shard_id: id.shard_id(),
            raw: id.to_raw(),
        }
    }

    fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// Executes the configured action, writing reports to `out`.
///
/// Returns `Ok(false)` when at least one token was rejected.
pub fn run(config: &CliConfig, out: &mut impl Write) -> anyhow::Result<bool> {
    match &config.action {
        Action::Encode {
            local_id,
            object_type,
            shard_id,
        } => {
            let token = encode(*local_id, *object_type, *shard_id)?;
            tracing::debug!(local_id, object_type, shard_id, %token, "minted token");
            match config.output {
                OutputFormat::Text => writeln!(out, "{token}")?,
                OutputFormat::Json => {
                    let report = EncodeReport {
                        token: &token,
                        local_id: *local_id,
                        object_type: *object_type,
                        shard_id: *shard_id,
                    };
                    serde_json::to_writer(&mut *out, &report)?;
                    writeln!(out)?;
                }
            }
            Ok(true)
        }
        Action::Decode { tokens } => {
            let mut all_ok = true;
            for token in tokens {
                let report = DecodeReport::new(token);
                all_ok &= !report.is_rejected();
                match config.output {
                    OutputFormat::Text => write_text(out, &report)?,
                    OutputFormat::Json => {
                        serde_json::to_writer(&mut *out, &report)?;
                        writeln!(out)?;
                    }
                }
            }
            Ok(all_ok)
        }
    }
}

fn write_text(out: &mut impl Write, report: &DecodeReport<'_>) -> std::io::Result<()> {
    match report {
        DecodeReport::Decoded {
            token,
            local_id,
            object_type,
            shard_id,
            raw,
        } => writeln!(
            out,
            "{token}\tlocal_id={local_id} object_type={object_type} shard_id={shard_id} raw={raw:#018x}"
        ),
        DecodeReport::Rejected { token, error } => writeln!(out, "{token}\terror: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(config: &CliConfig) -> (bool, String) {
        let mut out = Vec::new();
        let ok = run(config, &mut out).unwrap();
        (ok, String::from_utf8(out).unwrap())
    }

    fn encode_config(output: OutputFormat) -> CliConfig {
        CliConfig {
            output,
            action: Action::Encode {
                local_id: 1,
                object_type: 2,
                shard_id: 3,
            },
        }
    }

    fn decode_config(output: OutputFormat, tokens: &[&str]) -> CliConfig {
        CliConfig {
            output,
            action: Action::Decode {
                tokens: tokens.iter().map(ToString::to_string).collect(),
            },
        }
    }

    #[test]
    fn encode_text() {
        let (ok, out) = run_to_string(&encode_config(OutputFormat::Text));
        assert!(ok);
        assert_eq!(out, "W764HYc3Jw\n");
    }

    #[test]
    fn encode_json() {
        let (ok, out) = run_to_string(&encode_config(OutputFormat::Json));
        assert!(ok);
        assert_eq!(
            out,
            "{\"token\":\"W764HYc3Jw\",\"local_id\":1,\"object_type\":2,\"shard_id\":3}\n"
        );
    }

    #[test]
    fn encode_below_floor_is_an_error() {
        let config = CliConfig {
            output: OutputFormat::Text,
            action: Action::Encode {
                local_id: 0,
                object_type: 0,
                shard_id: 5,
            },
        };
        let mut out = Vec::new();
        let err = run(&config, &mut out).unwrap_err();
        assert!(err.to_string().contains("validity floor"), "{err}");
        assert!(out.is_empty());
    }

    #[test]
    fn decode_text_reports_each_token() {
        let (ok, out) = run_to_string(&decode_config(
            OutputFormat::Text,
            &["W764HYc3Jw", "11111111"],
        ));
        assert!(!ok);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "W764HYc3Jw\tlocal_id=1 object_type=2 shard_id=3 raw=0x0000000010080003"
        );
        assert!(lines[1].starts_with("11111111\terror: "), "{}", lines[1]);
    }

    #[test]
    fn decode_json_lines() {
        let (ok, out) = run_to_string(&decode_config(
            OutputFormat::Json,
            &["jpV2cENBWCo", "0OIl"],
        ));
        assert!(!ok);

        let values: Vec<serde_json::Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(values[0]["status"], "decoded");
        assert_eq!(values[0]["local_id"], 1);
        assert_eq!(values[0]["object_type"], 0);
        assert_eq!(values[0]["shard_id"], 262_143);
        assert_eq!(values[1]["status"], "rejected");
        assert_eq!(values[1]["token"], "0OIl");
        assert!(values[1]["error"].is_string());
    }

    #[test]
    fn decode_all_valid_is_ok() {
        let (ok, _) = run_to_string(&decode_config(
            OutputFormat::Text,
            &["W764HYc3Jw", "113Gn4KTx3"],
        ));
        assert!(ok);
    }
}
