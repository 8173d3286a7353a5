use glam::Vec3;

use crate::math::AABB;

use super::AssetError;

/// What the rig needs to know about a geometry file: extent and structure counts
#[derive(Debug, Clone, PartialEq)]
pub struct ObjSummary {
    pub bounds: Option<AABB>,
    pub vertex_count: usize,
    pub face_count: usize,
    pub group_count: usize,
    pub material_libs: Vec<String>,
    pub used_materials: Vec<String>,
}

/// Scan OBJ text for vertex positions and object/group/face records
pub fn scan_obj(text: &str, path: &str) -> Result<ObjSummary, AssetError> {
    let mut summary = ObjSummary {
        bounds: None,
        vertex_count: 0,
        face_count: 0,
        group_count: 0,
        material_libs: Vec::new(),
        used_materials: Vec::new(),
    };

    for (index, line) in text.lines().enumerate() {
        let mut fields = line.split_whitespace();
        match fields.next() {
            Some("v") => {
                let vertex = parse_vertex(fields).ok_or_else(|| AssetError::Parse {
                    path: path.to_string(),
                    line: index + 1,
                    message: format!("malformed vertex record: {:?}", line.trim()),
                })?;
                summary.bounds = Some(match summary.bounds {
                    Some(bounds) => bounds.expanded(vertex),
                    None => AABB::new(vertex, vertex),
                });
                summary.vertex_count += 1;
            }
            Some("f") => summary.face_count += 1,
            Some("o") | Some("g") => summary.group_count += 1,
            Some("mtllib") => summary.material_libs.extend(fields.map(str::to_string)),
            Some("usemtl") => {
                if let Some(name) = fields.next() {
                    if !summary.used_materials.iter().any(|m| m == name) {
                        summary.used_materials.push(name.to_string());
                    }
                }
            }
            _ => {}
        }
    }

    Ok(summary)
}

fn parse_vertex<'a>(mut fields: impl Iterator<Item = &'a str>) -> Option<Vec3> {
    let mut coord = || fields.next()?.parse::<f32>().ok().filter(|v| v.is_finite());
    Some(Vec3::new(coord()?, coord()?, coord()?))
}

/// Materials the geometry uses that `declared` does not define
pub fn missing_materials<'a>(summary: &'a ObjSummary, declared: &[String]) -> Vec<&'a str> {
    summary
        .used_materials
        .iter()
        .filter(|used| !declared.contains(used))
        .map(String::as_str)
        .collect()
}

/// Material names declared by `newmtl` records
pub fn scan_mtl(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            match fields.next() {
                Some("newmtl") => fields.next().map(str::to_string),
                _ => None,
            }
        })
        .collect()
}
