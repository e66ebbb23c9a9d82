use actix_web::dev::ServerHandle;
use futures_util::future::select_all;
use log::info;
use tokio::{
    io,
    signal::unix::{signal, SignalKind},
    task::JoinHandle,
};
use tokio_util::sync::CancellationToken;

/// Cancels `token` on the first SIGTERM, SIGINT, SIGHUP or SIGQUIT.
///
/// The spawned task also exits quietly if the token is cancelled elsewhere.
pub fn cancel_on_shutdown_signal(token: CancellationToken) -> io::Result<JoinHandle<()>> {
    let mut listeners = vec![
        (signal(SignalKind::terminate())?, "termination"),
        (signal(SignalKind::interrupt())?, "interrupt"),
        (signal(SignalKind::hangup())?, "hangup"),
        (signal(SignalKind::quit())?, "quit"),
    ];

    Ok(tokio::spawn(async move {
        let waits = listeners.iter_mut().map(|(listener, name)| {
            Box::pin(async move {
                listener.recv().await;
                *name
            })
        });

        tokio::select! {
            (name, _, _) = select_all(waits) => {
                info!("Received {name} signal");
                token.cancel();
            }
            _ = token.cancelled() => {}
        }
    }))
}

/// Gracefully stops the HTTP server once `token` is cancelled.
pub async fn stop_server_on_cancel(handle: ServerHandle, token: CancellationToken) {
    token.cancelled().await;
    info!("Stopping HTTP server");
    handle.stop(true).await;
}
