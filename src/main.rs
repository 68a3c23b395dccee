use trivia_quiz::QuizApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Trivia Quiz",
        options,
        Box::new(|cc| Ok(Box::new(QuizApp::restore(cc.storage)))),
    )
}

// En navegador se monta sobre el <canvas id="quiz_canvas"> de index.html
#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Info).ok();

    wasm_bindgen_futures::spawn_local(async {
        let Some(canvas) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("quiz_canvas"))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("no se encontró el canvas quiz_canvas");
            return;
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(QuizApp::restore(cc.storage)))),
            )
            .await;

        if let Err(err) = start_result {
            log::error!("no se pudo arrancar la app: {err:?}");
        }
    });
}
