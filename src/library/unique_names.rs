/// Fresh names for temporaries and labels. Each translation run owns its
/// own generator, so independent runs both start at `t0`/`L0` and can
/// never see each other's counters.
#[derive(Debug, Default)]
pub struct NameGen {
    temps: usize,
    labels: usize,
}

impl NameGen {
    pub fn new() -> Self {
        NameGen::default()
    }

    pub fn temporary(&mut self) -> String {
        let n = self.temps;
        self.temps += 1;
        format!("t{}", n)
    }

    pub fn label(&mut self) -> String {
        let n = self.labels;
        self.labels += 1;
        format!("L{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_sequential_from_zero() {
        let mut names = NameGen::new();
        assert_eq!(names.temporary(), "t0");
        assert_eq!(names.temporary(), "t1");
        assert_eq!(names.label(), "L0");
        assert_eq!(names.temporary(), "t2");
        assert_eq!(names.label(), "L1");
    }

    #[test]
    fn separate_generators_do_not_share_counters() {
        let mut a = NameGen::new();
        let mut b = NameGen::new();
        a.temporary();
        a.temporary();
        assert_eq!(b.temporary(), "t0");
        assert_eq!(b.label(), "L0");
    }
}
