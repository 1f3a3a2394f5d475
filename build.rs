use std::collections::HashSet;
use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/alzheimer_markers.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nMARKER CATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the marker catalog before building.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nMARKER CATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nMARKER CATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nMARKER CATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let markers = catalog.get("markers").unwrap_or_else(|| {
        panic!(
            "\n\nMARKER CATALOG BUILD ERROR: Missing 'markers' field\n\
             The catalog must have a top-level 'markers' array.\n"
        );
    });

    let markers = markers.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nMARKER CATALOG BUILD ERROR: 'markers' must be an array\n\
             Got: {markers}\n"
        );
    });

    assert!(
        !markers.is_empty(),
        "\n\nMARKER CATALOG BUILD ERROR: 'markers' must not be empty\n"
    );

    validate_markers(markers);

    println!(
        "cargo:warning=Validated marker catalog: {} markers",
        markers.len()
    );
}

fn validate_markers(markers: &[serde_json::Value]) {
    let mut seen = HashSet::new();

    for (i, marker) in markers.iter().enumerate() {
        let sequence = marker
            .get("sequence")
            .and_then(|v| v.as_str())
            .unwrap_or_else(|| {
                panic!("\n\nMARKER CATALOG BUILD ERROR: Marker at index {i} missing 'sequence' field\n")
            });

        assert!(
            marker.get("gene").and_then(|v| v.as_str()).is_some(),
            "\n\nMARKER CATALOG BUILD ERROR: Marker '{sequence}' (index {i}) missing 'gene' field\n"
        );

        assert!(
            !sequence.is_empty()
                && sequence
                    .chars()
                    .all(|c| matches!(c.to_ascii_uppercase(), 'A' | 'T' | 'G' | 'C')),
            "\n\nMARKER CATALOG BUILD ERROR: Marker '{sequence}' (index {i}) must be a non-empty \
             sequence over A, C, G and T\n"
        );

        assert!(
            seen.insert(sequence.to_ascii_uppercase()),
            "\n\nMARKER CATALOG BUILD ERROR: Duplicate marker sequence '{sequence}' (index {i})\n"
        );
    }
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/alzheimer_markers.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
