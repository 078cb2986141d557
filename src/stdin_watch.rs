//! Standard-input lifecycle watch
//!
//! A dev server run as a managed subprocess (for example under a BEAM port)
//! learns that its controlling process went away by observing end-of-file on
//! its standard input. If nothing reads the stream, that EOF is never seen
//! and the server hangs around as an orphan. This module keeps stdin drained
//! on a background thread and fires a callback once the stream closes.

use std::io::{self, Read};
use std::sync::Once;
use std::thread;

use tracing::{debug, warn};

static INSTALL: Once = Once::new();

/// Drain stdin in the background and run `on_close` once EOF is observed.
///
/// Process-wide, one-time setup with no teardown: the first call installs the
/// watcher and returns `true`; later calls are no-ops, drop their callbacks,
/// and return `false`. The drained bytes are discarded; the stream's content
/// is not interpreted.
pub fn on_stdin_close<F>(on_close: F) -> bool
where
    F: FnOnce() + Send + 'static,
{
    let mut installed = false;
    INSTALL.call_once(|| {
        installed = true;
        let spawned = thread::Builder::new()
            .name("rekindle-stdin".to_string())
            .spawn(move || {
                let mut buf = [0u8; 4096];
                let mut stdin = io::stdin().lock();
                loop {
                    match stdin.read(&mut buf) {
                        Ok(0) => break,
                        Ok(_) => continue,
                        Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                        Err(err) => {
                            warn!(%err, "stdin read failed, treating as closed");
                            break;
                        }
                    }
                }
                debug!("stdin closed by controlling process");
                on_close();
            });

        if let Err(err) = spawned {
            warn!(%err, "failed to spawn stdin watcher thread");
        }
    });
    installed
}
