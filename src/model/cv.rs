use serde::{Deserialize, Serialize};

/// A CV summary from the resume editor, used only to populate the
/// CV selector on the application form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CvDto {
    pub id: i64,
    pub title: String,
}
