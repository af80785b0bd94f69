use crate::{
    config::TerminalConfig,
    contact::{ContactForm, CONTACT_ENDPOINT},
    host::{Clock, Host, HostError, OpenTarget, RandomSource},
    recall::Direction,
    terminal::CommandTerminal,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Routes terminal side effects to the browser window.
pub struct WindowHost;

impl Host for WindowHost {
    fn navigate(&mut self, route: &str) -> Result<(), HostError> {
        let win = web_sys::window().ok_or(HostError::NoWindow)?;
        win.location().set_href(route).map_err(|e| {
            web_sys::console::error_1(&e);
            HostError::Rejected(format!("{:?}", e))
        })
    }

    fn open_external(&mut self, url: &str, target: OpenTarget) -> Result<(), HostError> {
        let win = web_sys::window().ok_or(HostError::NoWindow)?;
        match target {
            OpenTarget::Mail => win
                .location()
                .set_href(url)
                .map_err(|e| HostError::Rejected(format!("{:?}", e))),
            OpenTarget::Tab => match win.open_with_url_and_target(url, "_blank") {
                Ok(Some(_)) => Ok(()),
                Ok(None) => {
                    web_sys::console::warn_1(&format!("popup blocked: {}", url).into());
                    Err(HostError::PopupBlocked(url.to_string()))
                }
                Err(e) => Err(HostError::Rejected(format!("{:?}", e))),
            },
        }
    }
}

pub struct JsClock;

impl Clock for JsClock {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }

    fn format_local(&self, ms: f64) -> String {
        js_sys::Date::new(&JsValue::from_f64(ms))
            .to_locale_string("default", &JsValue::UNDEFINED)
            .into()
    }
}

pub struct JsRandom;

impl RandomSource for JsRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        let i = (js_sys::Math::random() * len as f64) as usize;
        i.min(len.saturating_sub(1))
    }
}

#[wasm_bindgen]
pub struct Portfolio {
    term: CommandTerminal<WindowHost, JsClock, JsRandom>,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Portfolio {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Portfolio {
        Portfolio::from_config(TerminalConfig::default())
    }

    /// Builds a terminal from a JSON config object; missing fields use the site defaults.
    #[wasm_bindgen]
    pub fn with_config(json: &str) -> Result<Portfolio, JsValue> {
        let cfg = TerminalConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Portfolio::from_config(cfg))
    }

    #[wasm_bindgen]
    pub fn prompt(&self) -> String {
        self.term.prompt()
    }

    #[wasm_bindgen]
    pub fn submit(&mut self, line: &str) {
        self.term.submit(line);
    }

    #[wasm_bindgen]
    pub fn submit_input(&mut self) {
        self.term.submit_input();
    }

    #[wasm_bindgen]
    pub fn recall(&mut self, direction: &str) {
        if let Some(dir) = Direction::parse(direction) {
            self.term.recall(dir);
        }
    }

    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.term.clear();
    }

    #[wasm_bindgen]
    pub fn input(&self) -> String {
        self.term.input().to_string()
    }

    #[wasm_bindgen]
    pub fn set_input(&mut self, text: &str) {
        self.term.set_input(text);
    }

    #[wasm_bindgen]
    pub fn lines_json(&self) -> String {
        serde_json::to_string(self.term.lines()).unwrap_or_else(|_| "[]".into())
    }
}

impl Portfolio {
    fn from_config(cfg: TerminalConfig) -> Portfolio {
        Portfolio {
            term: CommandTerminal::new(cfg, WindowHost, JsClock, JsRandom),
        }
    }
}

fn parse_form(json: &str) -> Result<ContactForm, String> {
    serde_json::from_str(json).map_err(|e| format!("invalid form json: {}", e))
}

/// Returns a JSON object of field errors, `{}` when the form is valid.
#[wasm_bindgen]
pub fn validate_contact_form(json: &str) -> Result<String, JsValue> {
    let form = parse_form(json).map_err(|e| JsValue::from_str(&e))?;
    Ok(match form.validate() {
        Ok(()) => "{}".into(),
        Err(errors) => serde_json::to_string(&errors).unwrap_or_else(|_| "{}".into()),
    })
}

async fn post_contact(body: String) -> Result<(), String> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(CONTACT_ENDPOINT, &opts)
        .map_err(|e| format!("Failed to create request: {:?}", e))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("Failed to set header: {:?}", e))?;

    let window = web_sys::window().ok_or("No window object")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Fetch failed: {:?}", e))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "Response is not a Response object")?;
    if !resp.ok() {
        return Err(format!("contact endpoint answered {}", resp.status()));
    }
    Ok(())
}

/// Validates and, when valid, posts the form in the background. The caller
/// gets the validation result immediately and never waits on the network.
#[wasm_bindgen]
pub fn send_contact_message(json: &str) -> Result<String, JsValue> {
    let form = parse_form(json).map_err(|e| JsValue::from_str(&e))?;
    if let Err(errors) = form.validate() {
        return Ok(serde_json::to_string(&errors).unwrap_or_else(|_| "{}".into()));
    }
    let body = serde_json::to_string(&form).map_err(|e| JsValue::from_str(&e.to_string()))?;
    spawn_local(async move {
        if let Err(e) = post_contact(body).await {
            web_sys::console::error_1(&e.into());
        }
    });
    Ok("{}".into())
}

#[wasm_bindgen]
pub fn copy_to_clipboard(text: &str) {
    let Some(win) = web_sys::window() else {
        return;
    };
    let promise = win.navigator().clipboard().write_text(text);
    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            web_sys::console::error_2(&"Failed to copy:".into(), &e);
        }
    });
}
