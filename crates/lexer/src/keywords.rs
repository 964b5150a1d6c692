use cnsh_core::Kw;

/// Exact-match lookup into the fixed keyword set. Anything not listed here
/// is a plain identifier.
pub fn keyword(text: &str) -> Option<Kw> {
    let kw = match text {
        "整数" => Kw::Int,
        "小数" => Kw::Float,
        "文本" => Kw::Text,
        "真假" => Kw::Bool,
        "空值" => Kw::Void,
        "如果" => Kw::If,
        "否则" => Kw::Else,
        "循环" => Kw::Loop,
        "当" => Kw::While,
        "返回" => Kw::Return,
        "跳出" => Kw::Break,
        "继续" => Kw::Continue,
        "函数" => Kw::Func,
        "类" => Kw::Class,
        "结构" => Kw::Struct,
        "返回类型" => Kw::ReturnType,
        "DNA追溯" => Kw::DnaTrace,
        "三色审计" => Kw::Audit,
        "打印" => Kw::Print,
        "输入" => Kw::Input,
        "真" => Kw::True,
        "假" => Kw::False,
        "空" => Kw::Null,
        "分配" => Kw::Alloc,
        "释放" => Kw::Free,
        "安全检查" => Kw::SafetyCheck,
        _ => return None,
    };
    Some(kw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spelling_round_trips_for_every_keyword() {
        let all = [
            Kw::Int,
            Kw::Float,
            Kw::Text,
            Kw::Bool,
            Kw::Void,
            Kw::If,
            Kw::Else,
            Kw::Loop,
            Kw::While,
            Kw::Return,
            Kw::Break,
            Kw::Continue,
            Kw::Func,
            Kw::Class,
            Kw::Struct,
            Kw::ReturnType,
            Kw::DnaTrace,
            Kw::Audit,
            Kw::Print,
            Kw::Input,
            Kw::True,
            Kw::False,
            Kw::Null,
            Kw::Alloc,
            Kw::Free,
            Kw::SafetyCheck,
        ];
        for kw in all {
            assert_eq!(keyword(kw.as_str()), Some(kw));
        }
    }

    #[test]
    fn near_misses_are_identifiers() {
        assert_eq!(keyword("整"), None);
        assert_eq!(keyword("整数组"), None);
        assert_eq!(keyword("main"), None);
    }
}
