// Prompt text sent to the generation service.
use shared::StrategyRequest;

pub const SYSTEM_INSTRUCTION: &str = r#"
You are "Calix Sanctus", an elite algorithmic trading architect and Pine Script v5 expert.
Your mission is to engineer FLAWLESS, institutional-grade trading strategies for TradingView.

CRITICAL LOGIC RULES (STRICT ENFORCEMENT):
1. **Sequential Trades Only:**
   - You MUST check `strategy.position_size == 0` before any Entry.
   - You MUST check `strategy.position_size != 0` before any Exit.
   - DO NOT allow multiple entries in the same direction (Pyramiding = 0).
   - A sequence MUST BE: LONG -> LONG EXIT -> SHORT -> SHORT EXIT.
2. **Visual Clarity:**
   - ONLY plot shapes/labels when a trade is actually executed.
   - Do not spam the chart with signals on every bar.
   - Use `style=shape.labelup` with text="LONG" and `style=shape.labeldown` with text="EXIT".
3. **Multi-Timeframe Logic (MTF):**
   - If the user requests a higher timeframe filter (e.g., 4H Trend on a 15m Chart), you MUST use `request.security`.
   - Correct Pattern: `trendEMA = request.security(syminfo.tickerid, "240", ta.ema(close, 200))`.
   - Prevent Repainting: Use `barmerge.lookahead_on` carefully or default behavior.

STRICT CODING STANDARDS:
1. **Version:** Always start with `//@version=5`.
2. **Type Safety (Fix Common Errors):**
   - `ta.supertrend(factor, atrPeriod)`: 'factor' is FLOAT, 'atrPeriod' is INT.
   - Ensure `input.int` is used for lengths/periods.
   - Ensure `input.float` is used for multipliers.
3. **Strategy Declaration:** Always use `strategy(..., overlay=true, initial_capital=10000, currency=currency.USD, pyramiding=0, default_qty_type=strategy.percent_of_equity, default_qty_value=10)`.
4. **Risk Management:** ALWAYS include adjustable Stop Loss and Take Profit inputs.
5. **Backtest Range:** ALWAYS include "Backtest Period" inputs (Start Date, End Date) to filter the trade execution window.
   - **CRITICAL:** Ensure that if the user does NOT change the default input dates, the strategy still executes. Default the logic to allow trades if `time` is greater than a default timestamp (e.g., year 2000) if inputs are tricky.

DEBUGGING ZERO TRADES:
- Ensure your logic does NOT create mutually exclusive conditions (e.g., RSI > 70 AND RSI < 30 at the same time).
- If using multiple indicators, ensure they have a reasonable probability of aligning.
- If the strategy yields 0 trades in backtest, it is a failure. Prioritize executability over perfection.

Tone: Professional, Concise, Technical, High-End Financial.
"#;

/// The two text parts of one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPrompt {
    pub system_instruction: String,
    pub prompt: String,
}

impl GenerationPrompt {
    pub fn for_request(request: &StrategyRequest) -> Self {
        Self { system_instruction: SYSTEM_INSTRUCTION.to_string(), prompt: build_prompt(request) }
    }
}

pub fn build_prompt(request: &StrategyRequest) -> String {
    let language = request.language.prompt_name();
    let indicators = request.indicators.iter().map(|k| k.id()).collect::<Vec<_>>().join(", ");
    let start = request.start_date.format(StrategyRequest::DATE_FORMAT);
    let end = request.end_date.format(StrategyRequest::DATE_FORMAT);

    format!(
        r#"
    Generate a professional "Calix Sanctus" trading strategy for TradingView Pine Script v5.

    Language Requirement: The 'explanation' field and the 'name' field MUST be in {language}. The code comments should be in English (standard).

    Parameters:
    - Trading Style: {style}
    - Risk Appetite (1-10): {risk}
    - Timeframe: {timeframe}
    - Core Indicators: {indicators}
    - Backtest Date Range: {start} to {end}
    - User Constraints: {notes}

    SPECIFIC REQUIREMENTS:
    1. **One Trade at a Time:** The logic MUST prevent entering a Long if we are already Long. Use `strategy.position_size == 0` logic.
    2. **Clear Exits:** Define clear Stop Loss (SL) and Take Profit (TP) based on ATR or Percent.
    3. **Visuals:** Plot a GREEN label "LONG" below bar on entry, and a RED label "EXIT" above bar on exit.
    4. **Type Fix:** Ensure `ta.supertrend` receives (float, int).
    5. **Backtest Configuration:**
       - Initial capital $10,000.
       - Include inputs for "Start Date" and "End Date".
       - **IMPORTANT:** Set the DEFAULT values for these inputs to `timestamp("{start} 00:00")` and `timestamp("{end} 23:59")`.
       - Wrap trading logic in `if (time >= startDate and time <= endDate)`.
    6. **The Perfect Trade Logic:**
       - If specific MTF rules are provided in 'User Constraints', prioritize them.
       - Synthesize a "Holy Grail" setup: Combine Trend (SuperTrend/EMA) + Momentum (RSI/MACD) + Volatility (ATR/ADX).
       - **CONFIRMATION IS KEY:** Only enter when multiple indicators align perfectly (Confluence).
       - Optimization Goal: Maximize Profit Factor (> 2.0) and Minimize Drawdown.
       - **Avoid Zero Trades:** Ensure entry conditions are not impossible. E.g. for Swing, allow slight deviations.

    Response JSON Schema:
    {{
      "name": "Strategy Name (Professional & Mystical)",
      "code": "Full Pine Script Code",
      "explanation": "Detailed technical explanation of the strategy logic in {language}."
    }}
  "#,
        language = language,
        style = request.style,
        risk = request.risk_level,
        timeframe = request.timeframe,
        indicators = indicators,
        start = start,
        end = end,
        notes = request.notes,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::{BotStyle, IndicatorKind, Language, TimeFrame};

    fn request(language: Language) -> StrategyRequest {
        StrategyRequest {
            risk_level: 7,
            indicators: vec![IndicatorKind::EmaCross, IndicatorKind::Rsi, IndicatorKind::Ichimoku],
            timeframe: TimeFrame::Hour4,
            style: BotStyle::Swing,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
            notes: "Only long above the 200 EMA".to_string(),
            language,
        }
    }

    #[test]
    fn test_prompt_interpolates_every_field() {
        let prompt = build_prompt(&request(Language::En));
        assert!(prompt.contains("- Trading Style: SWING"));
        assert!(prompt.contains("- Risk Appetite (1-10): 7"));
        assert!(prompt.contains("- Timeframe: 4h"));
        assert!(prompt.contains("- Core Indicators: EMA Cross, RSI, Ichimoku Cloud"));
        assert!(prompt.contains("- Backtest Date Range: 2025-01-01 to 2025-03-31"));
        assert!(prompt.contains("- User Constraints: Only long above the 200 EMA"));
        assert!(prompt.contains(r#"timestamp("2025-01-01 00:00")"#));
        assert!(prompt.contains(r#"timestamp("2025-03-31 23:59")"#));
        assert!(prompt.contains("MUST be in English"));
        assert!(prompt.contains(r#""name": "Strategy Name (Professional & Mystical)""#));
    }

    #[test]
    fn test_prompt_language_follows_request() {
        let prompt = build_prompt(&request(Language::Tr));
        assert!(prompt.contains("MUST be in Turkish"));
        assert!(prompt.contains("strategy logic in Turkish."));
    }

    #[test]
    fn test_generation_prompt_carries_system_instruction() {
        let prompt = GenerationPrompt::for_request(&request(Language::En));
        assert!(prompt.system_instruction.contains("Pine Script v5 expert"));
        assert!(prompt.system_instruction.contains("//@version=5"));
        assert_eq!(prompt.prompt, build_prompt(&request(Language::En)));
    }
}
