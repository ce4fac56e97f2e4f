use std::fs;

fn main() -> anyhow::Result<()> {
    // Same document the server mounts at /api-docs/openapi.json.
    let doc = portal_authz::docs::build_openapi(8000)?;
    let s = serde_json::to_string_pretty(&doc)?;
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/tmp/portal-authz-openapi.json".to_string());
    fs::write(&path, s)?;
    println!("wrote {}", path);
    Ok(())
}
