use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub data_root: PathBuf,
    pub output_dir: PathBuf,
    pub log_dir: PathBuf,
    fail_dir: PathBuf,
    calls_log: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let data_root = tmp.path().join("raw");
        let output_dir = tmp.path().join("out");
        let log_dir = tmp.path().join("logs");
        let fail_dir = tmp.path().join("fail");
        let calls_log = tmp.path().join("calls.log");

        for dir in [&home, &data_root, &output_dir, &fail_dir] {
            fs::create_dir_all(dir).expect("create env dir");
        }

        let converter = write_fake_converter(tmp.path(), &fail_dir, &calls_log);
        write_config(&home, &data_root, &output_dir, &log_dir, &converter);

        Self {
            _tmp: tmp,
            home,
            data_root,
            output_dir,
            log_dir,
            fail_dir,
            calls_log,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("nwbatch").expect("nwbatch binary");
        cmd.env("HOME", &self.home);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    /// Same as `run_json` but for runs expected to exit 1 (batch failures).
    pub fn run_json_failing(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .code(1)
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn add_date_dir(&self, subject: &str, date: u32) {
        fs::create_dir_all(self.data_root.join(subject).join(date.to_string()))
            .expect("create date dir");
    }

    /// Make the fake converter fail with "bad header" for this date.
    pub fn mark_failing(&self, date: u32) {
        fs::write(self.fail_dir.join(date.to_string()), b"").expect("write fail marker");
    }

    pub fn converter_calls(&self) -> Vec<String> {
        match fs::read_to_string(&self.calls_log) {
            Ok(raw) => raw.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn output_file(&self, subject: &str, date: u32) -> PathBuf {
        self.output_dir.join(format!("{}{}.nwb", subject, date))
    }

    pub fn report_name(subject: &str, date: u32) -> String {
        format!("{}{}_nwbinspector_report.txt", subject, date)
    }
}

fn write_config(
    home: &PathBuf,
    data_root: &PathBuf,
    output_dir: &PathBuf,
    log_dir: &PathBuf,
    converter: &PathBuf,
) {
    let dir = home.join(".config/nwbatch");
    fs::create_dir_all(&dir).expect("create config dir");
    let config = format!(
        "data_root = {:?}\noutput_dir = {:?}\nlog_dir = {:?}\nconverter = {:?}\n",
        data_root, output_dir, log_dir, converter
    );
    fs::write(dir.join("config.toml"), config).expect("write config");
}

/// A stand-in converter: records each query, fails marked dates with a
/// scripted stderr message, and otherwise drops the artifact plus an
/// inspector report into the output directory.
fn write_fake_converter(base: &std::path::Path, fail_dir: &PathBuf, calls_log: &PathBuf) -> PathBuf {
    let bin_dir = base.join("bin");
    fs::create_dir_all(&bin_dir).expect("create bin dir");
    let script_path = bin_dir.join("fake-trodes-to-nwb");

    let script = format!(
        r#"#!/bin/sh
out=""
query=""
while [ "$#" -gt 0 ]; do
  case "$1" in
    --path) shift 2 ;;
    --output-dir) out="$2"; shift 2 ;;
    --query) query="$2"; shift 2 ;;
    --probe-metadata) shift 2 ;;
    *) shift ;;
  esac
done
printf '%s\n' "$query" >> {calls}
subject=$(printf '%s' "$query" | sed "s/.*subject == '\([^']*\)'.*/\1/")
date=$(printf '%s' "$query" | sed 's/.*date == \([0-9]*\).*/\1/')
if [ -e "{fail}/$date" ]; then
  echo "bad header" >&2
  exit 1
fi
: > "$out/$subject$date.nwb"
printf 'inspector output\n' > "$out/${{subject}}${{date}}_nwbinspector_report.txt"
exit 0
"#,
        calls = calls_log.display(),
        fail = fail_dir.display()
    );
    fs::write(&script_path, script).expect("write fake converter");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&script_path, fs::Permissions::from_mode(0o755))
            .expect("mark converter executable");
    }

    script_path
}
