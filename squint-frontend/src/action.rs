#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ActionResult {
    Normal,
    Quit,
}
