// Transporte HTTP hacia el banco remoto. Devuelve el cuerpo en texto; la
// decodificación vive en `online`.

use super::SourceUnavailable;

pub const OPEN_TRIVIA_ENDPOINT: &str = "https://opentdb.com/api.php";

/// URL de la petición: `amount` preguntas de tipo opción múltiple.
pub fn bank_url(endpoint: &str, amount: usize) -> String {
    let base = endpoint.trim().trim_end_matches('/');
    let sep = if base.contains('?') { '&' } else { '?' };
    format!("{base}{sep}amount={amount}&type=multiple")
}

#[cfg(not(target_arch = "wasm32"))]
pub fn fetch_payload(url: &str, timeout: std::time::Duration) -> Result<String, SourceUnavailable> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|err| SourceUnavailable::Transport(format!("no se pudo crear el cliente: {err}")))?;

    let response = client
        .get(url)
        .send()
        .map_err(|err| SourceUnavailable::Transport(format!("error conectando con {url}: {err}")))?;

    if !response.status().is_success() {
        return Err(SourceUnavailable::HttpStatus(response.status().as_u16()));
    }

    response
        .text()
        .map_err(|err| SourceUnavailable::Transport(format!("no se pudo leer el body: {err}")))
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_payload(url: &str) -> Result<String, SourceUnavailable> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let window = web_sys::window()
        .ok_or_else(|| SourceUnavailable::Transport("no existe window en entorno WASM".into()))?;

    let request = Request::new_with_str_and_init(url, &opts).map_err(|err| {
        SourceUnavailable::Transport(format!("no se pudo crear request fetch: {err:?}"))
    })?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| SourceUnavailable::Transport(format!("fetch falló: {err:?}")))?;

    let response: Response = resp_value.dyn_into().map_err(|_| {
        SourceUnavailable::Transport("la respuesta fetch no es un Response válido".into())
    })?;

    if !response.ok() {
        return Err(SourceUnavailable::HttpStatus(response.status()));
    }

    let promise = response
        .text()
        .map_err(|err| SourceUnavailable::Transport(format!("no se pudo leer el body: {err:?}")))?;
    let text = JsFuture::from(promise)
        .await
        .map_err(|err| SourceUnavailable::Transport(format!("no se pudo leer el body: {err:?}")))?;

    text.as_string()
        .ok_or_else(|| SourceUnavailable::Transport("response.text() no devolvió string".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_url_adds_amount_and_type() {
        assert_eq!(
            bank_url(OPEN_TRIVIA_ENDPOINT, 50),
            "https://opentdb.com/api.php?amount=50&type=multiple"
        );
    }

    #[test]
    fn bank_url_keeps_existing_query() {
        assert_eq!(
            bank_url("http://127.0.0.1:9000/api.php?category=18/", 10),
            "http://127.0.0.1:9000/api.php?category=18&amount=10&type=multiple"
        );
    }
}
