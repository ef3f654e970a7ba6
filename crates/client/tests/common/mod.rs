//! In-process stand-in for the expense API.
//!
//! Serves canned rows on an ephemeral port and records every request so tests
//! can assert on what the client sent.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use expensa_client::ApiClient;
use expensa_shared::config::ApiConfig;
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub const XLSX_BYTES: &[u8] = b"PK\x03\x04expensa";

/// A request as seen by the mock.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: &'static str,
    pub path: String,
    pub query: HashMap<String, String>,
    pub body: Value,
}

type Log = Arc<Mutex<Vec<Recorded>>>;

/// A running mock API.
pub struct MockApi {
    pub base_url: String,
    log: Log,
}

impl MockApi {
    pub fn client(&self) -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: self.base_url.clone(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.log.lock().unwrap().clone()
    }

    pub fn last(&self, method: &str, path: &str) -> Recorded {
        self.requests()
            .into_iter()
            .rev()
            .find(|r| r.method == method && r.path == path)
            .unwrap_or_else(|| panic!("no {method} {path} recorded"))
    }
}

fn record(log: &Log, method: &'static str, path: impl Into<String>, query: HashMap<String, String>, body: Value) {
    log.lock().unwrap().push(Recorded {
        method,
        path: path.into(),
        query,
        body,
    });
}

fn ok(data: Value) -> Json<Value> {
    Json(json!({ "success": true, "data": data }))
}

fn failure(status: StatusCode, error: &str) -> Response {
    (status, Json(json!({ "success": false, "error": error }))).into_response()
}

fn with_id(mut body: Value, id: i64) -> Value {
    body["id"] = json!(id);
    body
}

pub fn categories_json() -> Value {
    json!([
        { "id": 1, "nome": "Carburante", "colore": "#F59E0B", "attiva": true },
        { "id": 2, "nome": "Ristoranti", "colore": "#10B981", "attiva": true }
    ])
}

pub fn clients_json() -> Value {
    json!([
        { "id": 1, "nome": "Acqua Minerale SpA", "codice": "ACQ", "citta": "Brescia", "provincia": "BS", "attivo": true },
        { "id": 2, "nome": "Chimica Pulita SRL", "codice": "CHP", "attivo": true }
    ])
}

pub fn vehicles_json() -> Value {
    json!([
        {
            "id": 1, "targa": "AB123CD", "tipo": "auto", "marca": "Fiat", "modello": "Panda",
            "tariffa_km_aci": 0.35, "tariffa_km_custom": 0.5, "usa_tariffa_custom": true, "attivo": true
        },
        {
            "id": 2, "targa": "EF456GH", "tipo": "furgone", "marca": "Ford", "modello": "Transit",
            "tariffa_km_aci": 0.42, "tariffa_km_custom": null, "usa_tariffa_custom": true, "attivo": true
        }
    ])
}

pub fn projects_json() -> Value {
    json!([
        { "id": 1, "cliente_id": 1, "codice": "PRJ-2026-001", "nome": "Impianto depurazione",
          "stato": "attivo", "clienti": { "nome": "Acqua Minerale SpA" } }
    ])
}

pub fn expenses_json() -> Value {
    json!([
        {
            "id": 2, "data_spesa": "2026-10-12", "importo": 70.0, "categoria_id": 2, "cliente_id": 1,
            "descrizione": "Pranzo con cliente", "addebitabile": true, "addebitata": false,
            "categorie": { "nome": "Ristoranti", "colore": "#10B981" },
            "clienti": { "nome": "Acqua Minerale SpA" }, "progetti": null
        },
        {
            "id": 1, "data_spesa": "2026-10-01", "importo": 30.0, "categoria_id": 1,
            "descrizione": "Pieno gasolio", "addebitabile": false, "addebitata": false,
            "categorie": { "nome": "Carburante", "colore": "#F59E0B" }
        }
    ])
}

pub fn trips_json() -> Value {
    json!([
        {
            "id": 2, "data_viaggio": "2026-10-20", "veicolo_id": 1, "partenza": "Gussago",
            "arrivo": "Brescia", "km_percorsi": 10.1, "tariffa_applicata": 0.685,
            "rimborso_calcolato": 6.92, "addebitabile": false,
            "veicoli": { "targa": "AB123CD", "marca": "Fiat", "modello": "Panda" }
        },
        {
            "id": 1, "data_viaggio": "2026-10-03", "veicolo_id": 1, "partenza": "Gussago",
            "arrivo": "Milano", "km_percorsi": 120.0, "tariffa_applicata": 0.5,
            "rimborso_calcolato": 60.0, "addebitabile": true
        }
    ])
}

async fn categories(State(log): State<Log>) -> Json<Value> {
    record(&log, "GET", "/categorie", HashMap::new(), Value::Null);
    ok(categories_json())
}

async fn create_category(State(log): State<Log>, Json(body): Json<Value>) -> Json<Value> {
    record(&log, "POST", "/categorie", HashMap::new(), body.clone());
    ok(json!([with_id(body, 10)]))
}

async fn clients(State(log): State<Log>) -> Json<Value> {
    record(&log, "GET", "/clienti", HashMap::new(), Value::Null);
    ok(clients_json())
}

async fn create_client(State(log): State<Log>, Json(body): Json<Value>) -> Json<Value> {
    record(&log, "POST", "/clienti", HashMap::new(), body.clone());
    ok(json!([with_id(body, 3)]))
}

async fn client(State(log): State<Log>, Path(id): Path<i64>) -> Response {
    record(&log, "GET", format!("/clienti/{id}"), HashMap::new(), Value::Null);
    if id == 404 {
        return (StatusCode::NOT_FOUND, "no such client").into_response();
    }
    let mut row = clients_json()[0].clone();
    row["id"] = json!(id);
    ok(row).into_response()
}

async fn update_client(State(log): State<Log>, Path(id): Path<i64>, Json(body): Json<Value>) -> Json<Value> {
    record(&log, "PUT", format!("/clienti/{id}"), HashMap::new(), body.clone());
    ok(json!([with_id(body, id)]))
}

async fn deactivate_client(State(log): State<Log>, Path(id): Path<i64>) -> Json<Value> {
    record(&log, "DELETE", format!("/clienti/{id}"), HashMap::new(), Value::Null);
    Json(json!({ "success": true }))
}

async fn projects(State(log): State<Log>, Query(query): Query<HashMap<String, String>>) -> Json<Value> {
    record(&log, "GET", "/progetti", query, Value::Null);
    ok(projects_json())
}

async fn vehicles(State(log): State<Log>) -> Json<Value> {
    record(&log, "GET", "/veicoli", HashMap::new(), Value::Null);
    ok(vehicles_json())
}

async fn create_vehicle(State(log): State<Log>, Json(body): Json<Value>) -> Json<Value> {
    record(&log, "POST", "/veicoli", HashMap::new(), body.clone());
    let mut row = with_id(body, 3);
    row["attivo"] = json!(true);
    ok(json!([row]))
}

async fn expenses(State(log): State<Log>, Query(query): Query<HashMap<String, String>>) -> Json<Value> {
    record(&log, "GET", "/spese", query, Value::Null);
    ok(expenses_json())
}

async fn create_expense(State(log): State<Log>, Json(body): Json<Value>) -> Response {
    record(&log, "POST", "/spese", HashMap::new(), body.clone());
    let complete = ["data_spesa", "importo", "descrizione"]
        .iter()
        .all(|key| body.get(key).is_some_and(|v| v != ""));
    if !complete {
        return failure(StatusCode::BAD_REQUEST, "Campi obbligatori mancanti");
    }
    ok(json!([with_id(body, 101)])).into_response()
}

async fn update_expense(State(log): State<Log>, Path(id): Path<i64>, Json(body): Json<Value>) -> Json<Value> {
    record(&log, "PUT", format!("/spese/{id}"), HashMap::new(), body.clone());
    ok(json!([with_id(body, id)]))
}

async fn delete_expense(State(log): State<Log>, Path(id): Path<i64>) -> Response {
    record(&log, "DELETE", format!("/spese/{id}"), HashMap::new(), Value::Null);
    if id == 500 {
        return failure(StatusCode::INTERNAL_SERVER_ERROR, "database unavailable");
    }
    Json(json!({ "success": true })).into_response()
}

async fn trips(State(log): State<Log>, Query(query): Query<HashMap<String, String>>) -> Json<Value> {
    record(&log, "GET", "/chilometriche", query, Value::Null);
    ok(trips_json())
}

async fn create_trip(State(log): State<Log>, Json(body): Json<Value>) -> Json<Value> {
    record(&log, "POST", "/chilometriche", HashMap::new(), body.clone());
    ok(json!([with_id(body, 201)]))
}

async fn update_trip(State(log): State<Log>, Path(id): Path<i64>, Json(body): Json<Value>) -> Json<Value> {
    record(&log, "PUT", format!("/chilometriche/{id}"), HashMap::new(), body.clone());
    let mut row = trips_json()[1].clone();
    if let (Value::Object(row), Value::Object(patch)) = (&mut row, body) {
        row.extend(patch);
    }
    row["id"] = json!(id);
    ok(json!([row]))
}

async fn delete_trip(State(log): State<Log>, Path(id): Path<i64>) -> Json<Value> {
    record(&log, "DELETE", format!("/chilometriche/{id}"), HashMap::new(), Value::Null);
    Json(json!({ "success": true }))
}

async fn dashboard(State(log): State<Log>) -> Json<Value> {
    record(&log, "GET", "/stats/dashboard", HashMap::new(), Value::Null);
    ok(json!({
        "totale_spese_mese": 100.0,
        "totale_addebitabili": 70.0,
        "totale_km_mese": 130.1,
        "totale_rimborsi_km": 66.92,
        "num_spese_mese": 2,
        "num_viaggi_mese": 2,
        "spese_per_categoria": {
            "Carburante": { "totale": 30.0, "colore": "#F59E0B" },
            "Ristoranti": { "totale": 70.0, "colore": "#10B981" }
        }
    }))
}

async fn monthly(State(log): State<Log>, Query(query): Query<HashMap<String, String>>) -> Json<Value> {
    record(&log, "GET", "/stats/mensili", query, Value::Null);
    let rows: Vec<Value> = (1..=12)
        .map(|m| json!({ "mese": m, "totale_spese": if m == 10 { 100.0 } else { 0.0 }, "totale_km": 0, "totale_rimborsi": 0 }))
        .collect();
    ok(Value::Array(rows))
}

async fn upload(State(log): State<Log>, mut multipart: Multipart) -> Response {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("image") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let size = field.bytes().await.map(|b| b.len()).unwrap_or_default();
        record(
            &log,
            "POST",
            "/upload-ricevuta",
            HashMap::new(),
            json!({ "file_name": file_name, "content_type": content_type, "size": size }),
        );

        if file_name.starts_with("text-only") {
            return Json(json!({
                "success": true,
                "image_url": format!("https://cdn.example.com/ricevute/{file_name}"),
                "ocr_data": { "full_text": "BAR CENTRALE\nP. IVA: 09876543210\nTOTALE: € 4,20\n05/10/2026" }
            }))
            .into_response();
        }
        if file_name.starts_with("no-ocr") {
            return Json(json!({
                "success": true,
                "image_url": format!("https://cdn.example.com/ricevute/{file_name}"),
                "ocr_data": { "warning": "OCR non disponibile - Google Vision non configurato" }
            }))
            .into_response();
        }
        return Json(json!({
            "success": true,
            "image_url": format!("https://cdn.example.com/ricevute/{file_name}"),
            "ocr_data": {
                "full_text": "TOTALE: € 6,70\n12/03/2026\nP.IVA 01234567890",
                "importo": 6.7,
                "data": "12/03/2026",
                "partita_iva": "01234567890"
            }
        }))
        .into_response();
    }
    failure(StatusCode::BAD_REQUEST, "Nessuna immagine fornita")
}

async fn export(State(log): State<Log>, Json(body): Json<Value>) -> Response {
    record(&log, "POST", "/export/excel", HashMap::new(), body.clone());
    if body["tipo"] == "spese" {
        return (
            [(CONTENT_TYPE, "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")],
            XLSX_BYTES,
        )
            .into_response();
    }
    failure(StatusCode::INTERNAL_SERVER_ERROR, "workbook generation failed")
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "timestamp": "2026-10-18T09:30:00" }))
}

/// Starts the mock on `127.0.0.1` with an ephemeral port.
pub async fn spawn() -> MockApi {
    let log = Log::default();

    let api = Router::new()
        .route("/categorie", get(categories).post(create_category))
        .route("/clienti", get(clients).post(create_client))
        .route(
            "/clienti/{id}",
            get(client).put(update_client).delete(deactivate_client),
        )
        .route("/progetti", get(projects))
        .route("/veicoli", get(vehicles).post(create_vehicle))
        .route("/spese", get(expenses).post(create_expense))
        .route("/spese/{id}", put(update_expense).delete(delete_expense))
        .route("/chilometriche", get(trips).post(create_trip))
        .route("/chilometriche/{id}", put(update_trip).delete(delete_trip))
        .route("/stats/dashboard", get(dashboard))
        .route("/stats/mensili", get(monthly))
        .route("/upload-ricevuta", post(upload))
        .route("/export/excel", post(export))
        .route("/health", get(health))
        .with_state(log.clone());
    let app = Router::new().nest("/api", api);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockApi {
        base_url: format!("http://{addr}/api"),
        log,
    }
}
