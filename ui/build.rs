use chrono::Utc;

fn main() {
    // RFC 3339 in UTC, e.g. "2023-10-27T10:30:00Z", so js Date can parse it.
    let built_at = Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    println!("cargo:rustc-env=BUILD_TIMESTAMP_ISO={}", built_at);
    // No rerun-if-changed: the timestamp is refreshed on every build.
}
