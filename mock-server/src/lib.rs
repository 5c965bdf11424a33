use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    pub id: String,
    pub name: String,
    pub color: Color,
    pub created_at: DateTime<Utc>,
}

/// Fields a client may set; anything else in the body is ignored.
#[derive(Deserialize)]
pub struct WidgetInput {
    pub name: String,
    pub color: Color,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Created {
    pub id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WidgetList {
    pub items: Vec<Widget>,
    pub total: usize,
}

#[derive(Deserialize)]
pub struct ListFilter {
    pub color: Option<Color>,
}

pub type Db = Arc<RwLock<HashMap<String, Widget>>>;

#[derive(Clone, Default)]
pub struct AppState {
    db: Db,
    token: Option<Arc<str>>,
}

pub const NOT_FOUND: &str = "not found";
pub const UNAUTHORIZED: &str = "unauthorized";

pub fn app() -> Router {
    router(AppState::default())
}

/// Like [`app`], but every route demands `authorization: Bearer <token>`.
pub fn app_with_token(token: &str) -> Router {
    router(AppState {
        db: Db::default(),
        token: Some(token.into()),
    })
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/widgets", get(list_widgets).post(create_widget))
        .route("/widgets/import", post(import_widget))
        .route("/widgets/{id}", get(get_widget).delete(delete_widget))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_token))
        .with_state(state)
}

pub async fn serve(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}

async fn require_token(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if let Some(token) = &state.token {
        let expected = format!("Bearer {token}");
        let presented = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        if presented != Some(expected.as_str()) {
            return (StatusCode::UNAUTHORIZED, UNAUTHORIZED).into_response();
        }
    }
    next.run(request).await
}

async fn insert(db: &Db, input: WidgetInput) -> Widget {
    let widget = Widget {
        id: Uuid::new_v4().to_string(),
        name: input.name,
        color: input.color,
        created_at: Utc::now(),
    };
    db.write().await.insert(widget.id.clone(), widget.clone());
    tracing::info!(id = %widget.id, "widget created");
    widget
}

async fn list_widgets(State(state): State<AppState>, Query(filter): Query<ListFilter>) -> Json<WidgetList> {
    let widgets = state.db.read().await;
    let mut items: Vec<Widget> = widgets
        .values()
        .filter(|w| filter.color.map_or(true, |c| w.color == c))
        .cloned()
        .collect();
    items.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
    Json(WidgetList {
        total: items.len(),
        items,
    })
}

async fn create_widget(
    State(state): State<AppState>,
    Json(input): Json<WidgetInput>,
) -> (StatusCode, Json<Created>) {
    let widget = insert(&state.db, input).await;
    let created = Created {
        id: widget.id,
        created_at: widget.created_at,
    };
    (StatusCode::CREATED, Json(created))
}

async fn import_widget(State(state): State<AppState>, Json(input): Json<WidgetInput>) -> StatusCode {
    insert(&state.db, input).await;
    StatusCode::ACCEPTED
}

async fn get_widget(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Widget>, (StatusCode, &'static str)> {
    let widgets = state.db.read().await;
    widgets
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, NOT_FOUND))
}

async fn delete_widget(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, &'static str)> {
    let mut widgets = state.db.write().await;
    match widgets.remove(&id) {
        Some(_) => {
            tracing::info!(%id, "widget deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err((StatusCode::NOT_FOUND, NOT_FOUND)),
    }
}
