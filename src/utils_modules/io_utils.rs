use crate::common::*;

#[doc = r#"
    Reads a TOML file and deserializes it into `T`.

    # Arguments
    * `file_path` - path of the TOML file to read

    # Returns
    * `Result<T, anyhow::Error>` - the parsed structure

    # Errors
    - the file does not exist or cannot be read
    - the TOML is malformed or does not match `T`
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &Path) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path)
        .with_context(|| format!("[io_utils->read_toml_from_file] cannot read {:?}", file_path))?;
    let toml: T = toml::from_str(&toml_content)
        .with_context(|| format!("[io_utils->read_toml_from_file] cannot parse {:?}", file_path))?;

    Ok(toml)
}

#[doc = r#"
    Serializes `value` as 2-space indented JSON and writes it to `file_path` atomically:
    the document is written to a sibling `*.tmp` file first and then renamed over the
    target, so readers only ever see the previous or the new document.

    Parent directories are created when missing.
"#]
pub fn write_json_atomic<T: Serialize>(file_path: &Path, value: &T) -> Result<(), anyhow::Error> {
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("[io_utils->write_json_atomic] cannot create {:?}", parent)
            })?;
        }
    }

    let json: String = serde_json::to_string_pretty(value)
        .context("[io_utils->write_json_atomic] failed to serialize document")?;

    let tmp_path: PathBuf = file_path.with_extension("json.tmp");

    {
        let mut tmp_file: fs::File = fs::File::create(&tmp_path).with_context(|| {
            format!("[io_utils->write_json_atomic] cannot create {:?}", tmp_path)
        })?;
        tmp_file.write_all(json.as_bytes())?;
        tmp_file.sync_all()?;
    }

    fs::rename(&tmp_path, file_path).with_context(|| {
        format!(
            "[io_utils->write_json_atomic] cannot move {:?} to {:?}",
            tmp_path, file_path
        )
    })?;

    Ok(())
}

#[doc = "Appends `content` to `file_path`, creating the file (and its directory) if needed"]
pub fn append_to_file(file_path: &Path, content: &str) -> Result<(), anyhow::Error> {
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file: fs::File = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(file_path)
        .with_context(|| format!("[io_utils->append_to_file] cannot open {:?}", file_path))?;

    file.write_all(content.as_bytes())?;

    Ok(())
}
