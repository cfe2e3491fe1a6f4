use std::io::Write;
use std::path::Path;

use crate::api::build_api_service;
use crate::app_data::AppData;
use crate::cli::SpecFormat;

/// Render the OpenAPI document for the current route table
pub fn render_spec(app_data: &AppData, format: SpecFormat) -> String {
    let service = build_api_service(app_data);
    match format {
        SpecFormat::Json => service.spec(),
        SpecFormat::Yaml => service.spec_yaml(),
    }
}

/// Write the OpenAPI document to `output`, or stdout when no path is given
pub fn export_spec(
    app_data: &AppData,
    format: SpecFormat,
    output: Option<&Path>,
) -> Result<(), std::io::Error> {
    let document = render_spec(app_data, format);

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, document)?;
            tracing::info!("OpenAPI document written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
