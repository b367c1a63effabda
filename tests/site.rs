use std::fs;
use std::path::Path;

use craft_wasm::View;

fn page(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("static").join(name);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("{}: {err}", path.display()))
}

fn data_view(html: &str) -> View {
    let start = html.find("data-view=\"").expect("body has data-view") + "data-view=\"".len();
    let end = start + html[start..].find('"').unwrap();
    html[start..end].parse().unwrap()
}

#[test]
fn every_page_names_a_view_and_its_mount_point() {
    for (file, view, mount) in [
        ("grid.html", View::Grid, Some("grid")),
        ("onboard.html", View::Onboard, Some("onboard")),
        ("palette.html", View::Palette, Some("palette")),
        ("index.html", View::Home, None),
    ] {
        let html = page(file);
        assert_eq!(data_view(&html), view, "{file}");
        if let Some(id) = mount {
            assert!(html.contains(&format!("id=\"{id}\"")), "{file} lacks #{id}");
        }
        assert!(html.contains("./pkg/craft_wasm.js"), "{file} does not load the bundle");
    }
}

#[test]
fn home_links_out_and_showcases_link_their_source() {
    let home = page("index.html");
    for href in [
        "https://draguta.dev",
        "https://github.com/vasiledraguta",
        "https://x.com/vasiledraguta",
    ] {
        assert!(home.contains(&format!("href=\"{href}\"")), "missing {href}");
    }

    for (file, dir) in [("grid.html", "grid"), ("palette.html", "scrolling-palette")] {
        let html = page(file);
        let source = format!("github.com/vasiledraguta/craft/tree/main/components/{dir}");
        assert!(html.contains(&source), "{file} lacks its source link");
    }
}
