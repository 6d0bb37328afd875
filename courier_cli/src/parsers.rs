use courier_optimizer::solver::leg_accounting::LegAccounting;

pub fn parse_leg_accounting(input: &str) -> Result<LegAccounting, String> {
    input.parse()
}
