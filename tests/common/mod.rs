#![allow(dead_code)]

use std::{
    io::{Read, Write},
    net::TcpListener,
    path::PathBuf,
    sync::{Arc, Mutex},
    thread::{self, JoinHandle},
};

use menu_render::{
    currency::PriceFormatter,
    errors::{LoadError, StoreError},
    menu::{
        CategoryOrderer, DocumentLoader, IconTable, ItemRowBuilder, MenuDocument, MenuRenderer,
        MenuSource, PreferredOrder, SectionBuilder,
    },
    storage::{CollapseStateStore, KeyValueStore},
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub const SCENARIO_JSON: &str = r#"{
    "Tapiocas": [{"item": "Tapioca de queijo", "preco": 12.5}],
    "Bebidas": [{"item": "Suco", "preco": 7}]
}"#;

/// Fresh directory that outlives the calling test.
pub fn temp_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

pub fn write_menu(json: &str) -> PathBuf {
    let path = temp_dir().join("base.json");
    std::fs::write(&path, json).expect("write menu fixture");
    path
}

/// Loader returning a fixed result, counting calls.
pub struct StaticLoader {
    result: Result<String, LoadError>,
    pub calls: Mutex<usize>,
}

impl StaticLoader {
    pub fn json(raw: &str) -> Self {
        Self {
            result: Ok(raw.to_string()),
            calls: Mutex::new(0),
        }
    }

    pub fn failing(err: LoadError) -> Self {
        Self {
            result: Err(err),
            calls: Mutex::new(0),
        }
    }
}

impl DocumentLoader for StaticLoader {
    fn load(&self, _source: &MenuSource) -> Result<MenuDocument, LoadError> {
        *self.calls.lock().unwrap() += 1;
        match &self.result {
            Ok(raw) => MenuDocument::from_json_str(raw),
            Err(err) => Err(err.clone()),
        }
    }
}

impl StaticLoader {
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

/// Loader sharing a [`StaticLoader`] so the test keeps a handle on its counter.
pub struct SharedLoader(pub Arc<StaticLoader>);

impl DocumentLoader for SharedLoader {
    fn load(&self, source: &MenuSource) -> Result<MenuDocument, LoadError> {
        self.0.load(source)
    }
}

/// Medium that refuses every operation, like disabled browser storage.
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("storage disabled".into()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("quota exceeded".into()))
    }

    fn remove_item(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("storage disabled".into()))
    }
}

pub fn preferred() -> PreferredOrder {
    PreferredOrder::new(["Tapiocas", "Lanches e Salgados"])
}

pub fn renderer_with(loader: Box<dyn DocumentLoader>, store: CollapseStateStore) -> MenuRenderer {
    MenuRenderer::new(
        MenuSource::parse("base.json"),
        "app",
        loader,
        CategoryOrderer::new(preferred()),
        SectionBuilder::new(
            ItemRowBuilder::new(PriceFormatter::fallback("BRL")),
            IconTable::default(),
        ),
        store,
    )
}

/// Serves a single canned HTTP response; the handle yields the raw request.
pub fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    let response = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept connection");
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|window| window == b"\r\n\r\n") {
            let read = stream.read(&mut buf).expect("read request");
            if read == 0 {
                break;
            }
            request.extend_from_slice(&buf[..read]);
        }
        stream
            .write_all(response.as_bytes())
            .expect("write response");
        String::from_utf8_lossy(&request).into_owned()
    });
    (format!("http://{addr}/base.json"), handle)
}
