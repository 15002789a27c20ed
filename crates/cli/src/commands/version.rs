use tracing::instrument;

#[instrument]
pub fn get_version_info() -> String {
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    tracing::debug!(
        package_name = name,
        package_version = version,
        correlation_id = %crate::tracing::correlation_id(),
        "Gathering package information"
    );

    format!("{name} {version}")
}
