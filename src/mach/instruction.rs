/// ## Instruction word
///
/// Every instruction is one packed 32-bit word. There are three shapes.
///
/// A statement head starts every statement:
///
/// ```text
///  31   30..27   26..0
/// [fn] [indent] [opcode]
/// ```
///
/// An operand follows a variable statement, one word per operand:
///
/// ```text
///  31    30..23     22..0
/// [var] [operator] [payload]
/// ```
///
/// The word after every head is raw: the jump target for a function
/// statement, the operand count for a variable statement.

#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Instruction(u32);

impl Instruction {
    pub const FUNCTION_BIT: u32 = 0x8000_0000;
    pub const INDENT_SHIFT: u32 = 27;
    pub const INDENT_MASK: u32 = 0x0F;
    pub const OPCODE_MASK: u32 = 0x07FF_FFFF;
    pub const OPERATOR_SHIFT: u32 = 23;
    pub const OPERATOR_MASK: u32 = 0xFF;
    pub const PAYLOAD_MASK: u32 = 0x007F_FFFF;
    pub const MAX_INDENT: u8 = 15;
    /// Operator code carried by the first operand of an expression.
    pub const NEUTRAL: i32 = 0;

    pub fn statement(function: bool, indent: u8, opcode: i32) -> Instruction {
        debug_assert!(indent <= Instruction::MAX_INDENT);
        let indent = u32::from(indent.min(Instruction::MAX_INDENT));
        let mut word = (indent << Instruction::INDENT_SHIFT) | (opcode as u32 & Instruction::OPCODE_MASK);
        if function {
            word |= Instruction::FUNCTION_BIT;
        }
        Instruction(word)
    }

    pub fn operand(variable: bool, operator: i32, payload: i32) -> Instruction {
        let operator = operator as u32 & Instruction::OPERATOR_MASK;
        let mut word =
            (operator << Instruction::OPERATOR_SHIFT) | (payload as u32 & Instruction::PAYLOAD_MASK);
        if variable {
            word |= Instruction::FUNCTION_BIT;
        }
        Instruction(word)
    }

    pub fn raw(word: u32) -> Instruction {
        Instruction(word)
    }

    pub fn word(self) -> u32 {
        self.0
    }

    /// Function flag on a statement head, variable flag on an operand.
    pub fn is_function(self) -> bool {
        self.0 & Instruction::FUNCTION_BIT != 0
    }

    pub fn indent(self) -> u8 {
        ((self.0 >> Instruction::INDENT_SHIFT) & Instruction::INDENT_MASK) as u8
    }

    pub fn opcode(self) -> i32 {
        (self.0 & Instruction::OPCODE_MASK) as i32
    }

    pub fn operator(self) -> i32 {
        ((self.0 >> Instruction::OPERATOR_SHIFT) & Instruction::OPERATOR_MASK) as i32
    }

    pub fn payload(self) -> i32 {
        (self.0 & Instruction::PAYLOAD_MASK) as i32
    }
}

impl From<Instruction> for u32 {
    fn from(i: Instruction) -> u32 {
        i.0
    }
}

impl std::fmt::Debug for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instruction({:#010X})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{Kind, Token};

    #[test]
    fn test_kind_limits_match_fields() {
        assert_eq!(Kind::Function.max_value() as u32, Instruction::OPCODE_MASK);
        assert_eq!(Kind::Variable.max_value() as u32, Instruction::PAYLOAD_MASK);
        assert_eq!(Kind::Constant.max_value() as u32, Instruction::PAYLOAD_MASK);
        assert_eq!(Kind::Operator.max_value() as u32, Instruction::OPERATOR_MASK);
        assert!(!Kind::Function.fits(-1));
        assert!(Kind::Operator.fits(255));
        assert!(!Kind::Operator.fits(256));
    }

    #[test]
    fn test_statement_fields() {
        let i = Instruction::statement(true, 3, 53);
        assert!(i.is_function());
        assert_eq!(i.indent(), 3);
        assert_eq!(i.opcode(), 53);
        assert_eq!(i.word(), 0x8000_0000 | (3 << 27) | 53);
        let i = Instruction::statement(false, 15, 82);
        assert!(!i.is_function());
        assert_eq!(i.indent(), 15);
    }

    #[test]
    fn test_operand_fields() {
        let i = Instruction::operand(true, 5, 12);
        assert!(i.is_function());
        assert_eq!(i.operator(), 5);
        assert_eq!(i.payload(), 12);
        let i = Instruction::operand(false, 0x1FF, Token::MAX_VALUE);
        assert_eq!(i.operator(), 0xFF);
        assert_eq!(i.payload(), Token::MAX_VALUE);
        assert!(!i.is_function());
    }

    #[test]
    fn test_payload_matches_token_bound() {
        assert_eq!(Instruction::PAYLOAD_MASK as i32, Token::MAX_VALUE);
    }
}
