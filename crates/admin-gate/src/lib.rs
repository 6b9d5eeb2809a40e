use site_kit_core::auth::{self, Credentials, DEFAULT_REALM, GateDecision};
use worker::*;

#[event(fetch)]
async fn main(req: Request, env: Env, _ctx: Context) -> Result<Response> {
    let path = req.path();
    let authorization = req.headers().get("Authorization")?;
    let credentials = credentials(&env);

    match auth::check(&path, authorization.as_deref(), credentials.as_ref()) {
        GateDecision::Pass => Fetch::Request(req).send().await,
        refused => {
            console_log!("admin gate: {} {}", refused.status(), path);
            let mut headers = Headers::new();
            if let Some(challenge) = refused.www_authenticate() {
                headers.set("WWW-Authenticate", &challenge)?;
            }
            Ok(Response::error(refused.body(), refused.status())?.with_headers(headers))
        }
    }
}

/// Credentials from the `ADMIN_USER` and `ADMIN_PASSWORD` secrets.
/// Missing or empty values leave the admin area closed.
fn credentials(env: &Env) -> Option<Credentials> {
    let user = env.secret("ADMIN_USER").ok()?.to_string();
    let password = env.secret("ADMIN_PASSWORD").ok()?.to_string();
    if user.is_empty() || password.is_empty() {
        return None;
    }
    let realm = env
        .var("ADMIN_REALM")
        .map(|v| v.to_string())
        .unwrap_or_else(|_| DEFAULT_REALM.to_string());
    Some(Credentials {
        user,
        password,
        realm,
    })
}
