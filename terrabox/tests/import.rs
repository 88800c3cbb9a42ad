#![cfg(feature = "cli")]

use predicates::str;
use test_utilities::*;

const SQUARE: &str = "<kml><Placemark><coordinates>-110,38,0 -109,38,0 -109,39,0 -110,39,0</coordinates></Placemark></kml>";

#[test]
fn import_kml() -> Result<(), Box<dyn std::error::Error>> {
	terrabox_cmd()
		.args(["import", "--vertices", &path_to_string(&get_testdata("boundary.kml"))])
		.assert()
		.success()
		.stdout("north east: (39, -109)\nsouth west: (38, -110)\nvertices: 4\n38 -110\n38 -109\n39 -109\n39 -110\n");
	Ok(())
}

#[test]
fn import_kmz() -> Result<(), Box<dyn std::error::Error>> {
	let (_dir, path) = write_kmz("boundary.KMZ", &[("doc.kml", SQUARE), ("images/readme.txt", "ignored")]);
	terrabox_cmd()
		.args(["import", &path_to_string(&path)])
		.assert()
		.success()
		.stdout(str::contains("north east: (39, -109)"))
		.stdout(str::contains("vertices: 4"));
	Ok(())
}

#[test]
fn import_too_few_vertices() -> Result<(), Box<dyn std::error::Error>> {
	terrabox_cmd()
		.args(["import", &path_to_string(&get_testdata("line.kml"))])
		.assert()
		.failure()
		.code(1)
		.stdout(str::is_empty())
		.stderr(str::contains("need at least 3 coordinates, found 2"));
	Ok(())
}

#[test]
fn import_unsupported_format() -> Result<(), Box<dyn std::error::Error>> {
	let (_dir, path) = get_temp_file("track.gpx");
	std::fs::write(&path, SQUARE)?;
	terrabox_cmd()
		.args(["import", &path_to_string(&path)])
		.assert()
		.failure()
		.stderr(str::contains("unsupported boundary file format 'gpx'"));
	Ok(())
}

#[test]
fn import_broken_kmz() -> Result<(), Box<dyn std::error::Error>> {
	let (_dir, path) = get_temp_file("broken.kmz");
	std::fs::write(&path, "not a zip archive")?;
	terrabox_cmd()
		.args(["import", &path_to_string(&path)])
		.assert()
		.failure()
		.stderr(str::contains("failed to parse boundary file"));
	Ok(())
}
