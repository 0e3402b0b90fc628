#[derive(Default, PartialEq, Debug, Clone, Copy)]
pub enum Status {
    #[default]
    NotSolved,
    Optimal,
}
