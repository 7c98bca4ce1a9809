//! Async executor for the ingress query command

use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, instrument};

use super::error::{KubeError, KubeResult};
use super::IngressCommand;

/// Run the command and return its raw stdout
///
/// # Errors
///
/// Returns an error if:
/// - The program is not in PATH
/// - The process fails to spawn
/// - The command exits with non-zero status
#[instrument(fields(cmd = %command.program, args = %command.args.join(" ")))]
pub async fn execute_raw(command: &IngressCommand) -> KubeResult<String> {
    debug!("executing ingress query");

    let output = Command::new(&command.program)
        .args(&command.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                KubeError::NotFound(command.program.clone())
            } else {
                KubeError::SpawnError(e)
            }
        })?
        .wait_with_output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let code = output.status.code().unwrap_or(-1);

        debug!(code, stderr = %stderr, "ingress query failed");
        return Err(KubeError::CommandFailed {
            program: command.program.clone(),
            code,
            stderr,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
