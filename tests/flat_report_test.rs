use anyhow::Result;
use apic_lat::config::toml_config::TomlConfig;
use apic_lat::{ApicError, Engine, LatencyMode, LocalStorage, RunConfig};
use std::path::PathBuf;
use tempfile::TempDir;

const ANALYTICS: &str = "\
time_to_serve_request,@timestamp,transaction_id,api_name,latency_info2,latency_info
120,2024-05-01T10:00:00Z,t1,login,\"[{\"\"task\"\":\"\"auth\"\",\"\"ended\"\":100}]\",\"[{\"\"task\"\":\"\"auth\"\",\"\"started\"\":90}]\"
80,2024-05-01T10:00:01Z,t2,search,\"[{\"\"task\"\":\"\"index\"\",\"\"ended\"\":30},{\"\"task\"\":\"\"rank\"\",\"\"ended\"\":70}]\",[]
15,2024-05-01T10:00:02Z,t3,health,[],[]
";

fn run_flat(inputs: Vec<PathBuf>, latency_mode: LatencyMode) -> Result<String> {
    let config = RunConfig {
        inputs,
        latency_mode,
        ..RunConfig::default()
    };
    let mut out = Vec::new();
    Engine::new(LocalStorage::new(), config).run(&mut out)?;
    Ok(String::from_utf8(out)?)
}

/// 每筆資料輸出一行，順序與輸入相同
#[test]
fn test_one_line_per_row() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("analytics.csv");
    std::fs::write(&input, ANALYTICS)?;

    let output = run_flat(vec![input], LatencyMode::V2)?;
    assert_eq!(
        output,
        "120,2024-05-01T10:00:00Z,t1,login,auth=100\n\
         80,2024-05-01T10:00:01Z,t2,search,index=30,rank=70\n\
         15,2024-05-01T10:00:02Z,t3,health\n"
    );
    Ok(())
}

#[test]
fn test_lat_info_switches_field_and_key() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("analytics.csv");
    std::fs::write(&input, ANALYTICS)?;

    let output = run_flat(vec![input], LatencyMode::Legacy)?;
    let first = output.lines().next().unwrap_or_default();
    assert_eq!(first, "120,2024-05-01T10:00:00Z,t1,login,auth=90");
    Ok(())
}

#[test]
fn test_multiple_inputs_in_order() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let a = temp_dir.path().join("a.csv");
    let b = temp_dir.path().join("b.csv");
    std::fs::write(&a, ANALYTICS)?;
    std::fs::write(
        &b,
        "time_to_serve_request,@timestamp,transaction_id,api_name,latency_info2\n1,x,t9,last,[]\n",
    )?;

    let output = run_flat(vec![a, b], LatencyMode::V2)?;
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[3], "1,x,t9,last");
    Ok(())
}

#[test]
fn test_column_names_from_toml() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("renamed.csv");
    std::fs::write(
        &input,
        "duration,ts,tid,service,lat\n9,now,t1,pay,\"[{\"\"task\"\":\"\"charge\"\",\"\"ended\"\":4}]\"\n",
    )?;
    let config_path = temp_dir.path().join("columns.toml");
    std::fs::write(
        &config_path,
        r#"
[columns]
api_name = "service"
transaction_id = "tid"
time_to_serve_request = "duration"
timestamp = "ts"

[latency]
v2_field = "lat"
"#,
    )?;

    let mut config = RunConfig {
        inputs: vec![input],
        ..RunConfig::default()
    };
    TomlConfig::from_file(&config_path)?.apply_to(&mut config);

    let mut out = Vec::new();
    Engine::new(LocalStorage::new(), config).run(&mut out)?;
    assert_eq!(String::from_utf8(out)?, "9,now,t1,pay,charge=4\n");
    Ok(())
}

#[test]
fn test_missing_file_is_reported() {
    let err = run_flat(vec![PathBuf::from("/no/such/file.csv")], LatencyMode::V2).unwrap_err();
    let err = err.downcast::<ApicError>().unwrap();
    assert!(matches!(err, ApicError::FileError { .. }));
}

#[test]
fn test_ragged_row_is_malformed() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("ragged.csv");
    std::fs::write(
        &input,
        "time_to_serve_request,@timestamp,transaction_id,api_name,latency_info2\n1,x,t1\n",
    )?;

    let err = run_flat(vec![input], LatencyMode::V2).unwrap_err();
    let err = err.downcast::<ApicError>().unwrap();
    assert!(matches!(err, ApicError::MalformedRow { line: 2, .. }));
    Ok(())
}
