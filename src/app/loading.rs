use super::*;
use crate::source::resolve_online;
use std::sync::mpsc::{self, TryRecvError};

impl QuizApp {
    /// Lanza la petición online. Solo puede haber una en vuelo.
    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn spawn_online_fetch(&mut self, url: String) {
        let (tx, rx) = mpsc::channel();
        self.pending_load = Some(rx);
        let timeout = self.config.request_timeout;

        std::thread::spawn(move || {
            let result = crate::source::remote::fetch_payload(&url, timeout);
            let _ = tx.send(result);
        });
    }

    #[cfg(target_arch = "wasm32")]
    pub(crate) fn spawn_online_fetch(&mut self, url: String) {
        let (tx, rx) = mpsc::channel();
        self.pending_load = Some(rx);

        wasm_bindgen_futures::spawn_local(async move {
            let result = crate::source::remote::fetch_payload(&url).await;
            let _ = tx.send(result);
        });
    }

    /// Se llama en cada frame. Cuando llega el payload, decodifica o cae al
    /// banco integrado y arranca la sesión.
    pub fn poll_pending_load(&mut self) {
        let received = match self.pending_load.as_ref().map(|rx| rx.try_recv()) {
            None | Some(Err(TryRecvError::Empty)) => return,
            Some(Ok(result)) => result,
            Some(Err(TryRecvError::Disconnected)) => Err(SourceUnavailable::Transport(
                "la tarea de descarga terminó sin respuesta".into(),
            )),
        };
        self.pending_load = None;

        let mut rng = rand::rng();
        let resolution = resolve_online(received, &mut rng);
        self.begin_session(resolution, &mut rng);
    }
}
